// Viewport normalization for hosts where the reported window height drifts
// out of sync with the rendered document.

use dioxus::prelude::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, info};
#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg(target_arch = "wasm32")]
use super::debounce::BrowserClock;
use super::debounce::{Clock, Debouncer};
use super::host::HostInfo;

/// Quiet period between the last resize/scroll/rotation event and the
/// correction.
#[allow(dead_code)]
pub const SETTLE_MS: u32 = 100;

/// The document geometry the normalizer reads and writes.
pub trait ViewportSurface {
    fn inner_height_px(&self) -> f64;
    fn set_root_height_px(&self, height: f64);
    fn scroll_top_px(&self) -> i32;
    fn scroll_to_origin(&self);
}

/// Pin the root element to the real window height, and put the page back at
/// the origin if the browser left it scrolled.
pub fn correct_viewport<S: ViewportSurface>(surface: &S) {
    surface.set_root_height_px(surface.inner_height_px());
    if surface.scroll_top_px() != 0 {
        surface.scroll_to_origin();
    }
}

/// Debounced height correction for one document.
#[allow(dead_code)]
pub struct ViewportNormalizer<S: ViewportSurface + 'static, C: Clock> {
    surface: Rc<S>,
    debounce: Debouncer<C>,
}

#[allow(dead_code)]
impl<S: ViewportSurface + 'static, C: Clock> ViewportNormalizer<S, C> {
    pub fn new(surface: Rc<S>, clock: C, settle_ms: u32) -> Self {
        Self {
            surface,
            debounce: Debouncer::new(clock, settle_ms),
        }
    }

    /// Correct immediately, bypassing the debounce window.
    pub fn apply_now(&self) {
        correct_viewport(&*self.surface);
    }

    /// Note a resize/scroll/rotation event; the correction runs once the
    /// burst settles.
    pub fn request_fix(&mut self) {
        let surface = Rc::clone(&self.surface);
        self.debounce.call(move || correct_viewport(&*surface));
    }
}

/// Activation guard: only hosts with the known quirk get listeners at all.
#[allow(dead_code)]
fn should_install(host: Option<&HostInfo>) -> bool {
    host.map(HostInfo::has_viewport_quirk).unwrap_or(false)
}

/// Live DOM surface.
#[cfg(target_arch = "wasm32")]
pub struct DomViewport;

#[cfg(target_arch = "wasm32")]
impl ViewportSurface for DomViewport {
    fn inner_height_px(&self) -> f64 {
        window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn set_root_height_px(&self, height: f64) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() {
            let _ = root.style().set_property("height", &format!("{height}px"));
        }
    }

    fn scroll_top_px(&self) -> i32 {
        window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.body())
            .map(|body| body.scroll_top())
            .unwrap_or(0)
    }

    fn scroll_to_origin(&self) {
        if let Some(win) = window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Side-effect-only component: arms the viewport fix when the host needs it.
#[component]
pub fn ViewportManager() -> Element {
    use_effect(install_viewport_fix);
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
fn install_viewport_fix() {
    thread_local! {
        static INSTALLED: Cell<bool> = Cell::new(false);
    }
    // Remounts must not stack a second listener set.
    if INSTALLED.with(|flag| flag.replace(true)) {
        return;
    }

    let host = HostInfo::detect();
    if !should_install(host.as_ref()) {
        debug!("viewport fix not needed on this host");
        return;
    }
    let Some(win) = window() else {
        return;
    };

    info!("arming viewport height fix");
    let normalizer = Rc::new(RefCell::new(ViewportNormalizer::new(
        Rc::new(DomViewport),
        BrowserClock,
        SETTLE_MS,
    )));
    normalizer.borrow().apply_now();

    for event in ["resize", "scroll", "orientationchange"] {
        let normalizer = Rc::clone(&normalizer);
        let callback = Closure::wrap(Box::new(move || {
            normalizer.borrow_mut().request_fix();
        }) as Box<dyn FnMut()>);
        let _ = win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        callback.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn install_viewport_fix() {}
