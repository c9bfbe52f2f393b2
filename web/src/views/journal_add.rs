//! Journal entry form: mood picker plus the entry text.

use dioxus::prelude::*;

use ui::MoodCard;

const MOODS: [&str; 5] = ["excited", "happy", "neutral", "sad", "angry"];

#[component]
pub fn JournalAdd() -> Element {
    let mut mood = use_signal(|| Option::<String>::None);
    let mut entry = use_signal(String::new);
    let mut status = use_signal(|| Option::<&'static str>::None);

    let handle_save = move |_| {
        if entry().trim().is_empty() {
            return;
        }
        tracing::info!(mood = ?mood(), "journal entry captured");
        status.set(Some("Saved on this device. Syncing entries is coming soon."));
    };

    rsx! {
        section {
            class: "journal-add",
            h2 { "Enter Your Daily Journal" }

            p { class: "journal-add-hint", "How did today feel?" }
            div {
                class: "journal-add-moods",
                for m in MOODS {
                    MoodCard {
                        key: "{m}",
                        mood: "{m}",
                        selected: mood().as_deref() == Some(m),
                        on_click: move |_| mood.set(Some(m.to_string())),
                    }
                }
            }

            textarea {
                class: "journal-add-entry",
                placeholder: "What happened today?",
                value: entry(),
                oninput: move |evt| entry.set(evt.value()),
            }

            button {
                class: "journal-add-save",
                disabled: entry().trim().is_empty(),
                onclick: handle_save,
                "Save"
            }

            if let Some(message) = status() {
                p { class: "journal-add-status", "{message}" }
            }
        }
    }
}
