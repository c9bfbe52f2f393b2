use dioxus::prelude::*;

/// Empty state for the entries list.
#[component]
pub fn JournalEntries() -> Element {
    rsx! {
        section {
            class: "section-placeholder",
            h2 { "Entries" }
            p { "Your past journals will be listed here." }
        }
    }
}
