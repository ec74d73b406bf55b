// Speech bridge: relays the UI runtime's outbound "speak" channel to the
// platform speech queue.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use futures_util::StreamExt;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, SpeechSynthesisUtterance};

/// One outbound message from the UI runtime: text to vocalize.
pub struct SpeakRequest(pub String);

/// Where vocalization requests go, when the host can take them.
pub trait SpeechSink {
    fn is_available(&self) -> bool;
    fn say(&self, text: &str);
}

/// Browser speech synthesis. Submission is fire-and-forget; playback order
/// and pacing belong to the platform's own queue.
#[cfg(target_arch = "wasm32")]
pub struct WebSpeech;

#[cfg(target_arch = "wasm32")]
impl SpeechSink for WebSpeech {
    fn is_available(&self) -> bool {
        let Some(win) = window() else {
            return false;
        };
        js_sys::Reflect::has(win.as_ref(), &JsValue::from_str("speechSynthesis")).unwrap_or(false)
    }

    fn say(&self, text: &str) {
        let Some(synth) = window().and_then(|win| win.speech_synthesis().ok()) else {
            return;
        };
        let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) else {
            return;
        };
        synth.speak(&utterance);
    }
}

/// Non-web targets have no speech surface; the capability reads as absent.
#[cfg(not(target_arch = "wasm32"))]
pub struct NullSpeech;

#[cfg(not(target_arch = "wasm32"))]
impl SpeechSink for NullSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn say(&self, _text: &str) {}
}

#[cfg(target_arch = "wasm32")]
fn host_sink() -> impl SpeechSink {
    WebSpeech
}

#[cfg(not(target_arch = "wasm32"))]
fn host_sink() -> impl SpeechSink {
    NullSpeech
}

/// Capability-checked dispatch: hosts without speech drop the message,
/// nothing is queued locally.
pub fn forward_to_sink<S: SpeechSink>(sink: &S, text: &str) {
    if !sink.is_available() {
        debug!("speech synthesis unavailable, dropping message");
        return;
    }
    sink.say(text);
}

/// Subscribes to the outbound "speak" channel and relays each message to the
/// host speech queue. The wrapped subtree reaches the channel through
/// context, via `use_coroutine_handle::<SpeakRequest>()`.
#[component]
pub fn SpeechBridge(children: Element) -> Element {
    use_coroutine(move |mut rx: UnboundedReceiver<SpeakRequest>| async move {
        let sink = host_sink();
        while let Some(SpeakRequest(text)) = rx.next().await {
            forward_to_sink(&sink, &text);
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct RecordingSink {
        present: bool,
        spoken: RefCell<Vec<String>>,
    }

    impl RecordingSink {
        fn new(present: bool) -> Self {
            Self {
                present,
                spoken: RefCell::new(Vec::new()),
            }
        }
    }

    impl SpeechSink for RecordingSink {
        fn is_available(&self) -> bool {
            self.present
        }

        fn say(&self, text: &str) {
            self.spoken.borrow_mut().push(text.to_string());
        }
    }

    #[test]
    fn forwards_each_message_in_emission_order() {
        let sink = RecordingSink::new(true);

        forward_to_sink(&sink, "hello");
        forward_to_sink(&sink, "world");

        assert_eq!(*sink.spoken.borrow(), vec!["hello", "world"]);
    }

    #[test]
    fn absent_capability_drops_messages_silently() {
        let sink = RecordingSink::new(false);

        forward_to_sink(&sink, "hello");
        forward_to_sink(&sink, "world");

        assert!(sink.spoken.borrow().is_empty());
    }

    #[test]
    fn null_sink_reports_capability_absent() {
        assert!(!NullSpeech.is_available());
    }
}
