use dioxus::prelude::*;

mod components;
mod db;

use components::{ReaderView, SpeechBridge, ViewportManager};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "SpeakPad" }

        // Mobile / home-screen metadata
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, viewport-fit=cover",
        }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-status-bar-style", content: "default" }
        document::Meta { name: "apple-mobile-web-app-title", content: "SpeakPad" }

        ViewportManager {}
        SpeechBridge { ReaderView {} }
    }
}
