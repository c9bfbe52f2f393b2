use dioxus::prelude::*;

/// Empty state for the explore section.
#[component]
pub fn Explore() -> Element {
    rsx! {
        section {
            class: "section-placeholder",
            h2 { "Explore" }
            p { "Prompts and ideas from the community will show up here." }
        }
    }
}
