use dioxus::prelude::*;

use crate::components::SpeakRequest;
use crate::db::{load_draft, load_settings, save_draft, save_settings};

/// The pad itself: a draft text area and a button that reads it out loud.
#[component]
pub fn ReaderView() -> Element {
    let speak = use_coroutine_handle::<SpeakRequest>();
    let mut draft = use_signal(load_draft);
    let mut settings = use_signal(load_settings);

    let on_input = move |evt: FormEvent| {
        let text = evt.value();
        save_draft(&text);
        draft.set(text);
    };

    let on_toggle = move |_| {
        let mut next = settings();
        next.read_aloud = !next.read_aloud;
        save_settings(&next);
        settings.set(next);
    };

    let on_speak = move |_| {
        if !settings().read_aloud {
            return;
        }
        let text = draft();
        if text.trim().is_empty() {
            return;
        }
        speak.send(SpeakRequest(text));
    };

    rsx! {
        main { class: "reader",
            textarea {
                class: "reader-draft",
                placeholder: "Type something to read aloud",
                value: "{draft}",
                oninput: on_input,
            }
            div { class: "reader-controls",
                label { class: "reader-toggle",
                    input {
                        r#type: "checkbox",
                        checked: settings().read_aloud,
                        onchange: on_toggle,
                    }
                    "Read aloud"
                }
                button { class: "reader-speak", onclick: on_speak, "Speak" }
            }
        }
    }
}
