use dioxus::prelude::*;

/// Empty state for the reviews section.
#[component]
pub fn Reviews() -> Element {
    rsx! {
        section {
            class: "section-placeholder",
            h2 { "Review" }
            p { "Weekly and monthly reviews will show up here." }
        }
    }
}
