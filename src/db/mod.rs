// Stored preferences: browser local storage on the web, defaults elsewhere.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "speakpad.app_settings";
#[cfg(target_arch = "wasm32")]
const DRAFT_KEY: &str = "speakpad.draft";

/// App settings persisted across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_read_aloud")]
    pub read_aloud: bool,
}

fn default_read_aloud() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { read_aloud: true }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> AppSettings {
    LocalStorage::get(SETTINGS_KEY).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &AppSettings) {
    let _ = LocalStorage::set(SETTINGS_KEY, settings);
}

#[cfg(target_arch = "wasm32")]
pub fn load_draft() -> String {
    LocalStorage::get(DRAFT_KEY).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn save_draft(draft: &str) {
    let _ = LocalStorage::set(DRAFT_KEY, draft);
}

// Native builds keep the same API surface with in-memory defaults; the
// browser bridges are inert there, so nothing is worth persisting.

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> AppSettings {
    AppSettings::default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_settings(_settings: &AppSettings) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_draft() -> String {
    String::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_draft(_draft: &str) {}
