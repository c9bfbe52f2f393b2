//! Mood tile for the journal entry form.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaFaceAngry, FaFaceFrown, FaFaceLaugh, FaFaceMeh, FaFaceSmile,
};
use dioxus_free_icons::Icon;

use crate::format::capitalize_first_letter;

fn mood_icon(mood: &str) -> Element {
    match mood {
        "happy" => rsx! { Icon { icon: FaFaceSmile, width: 24, height: 24 } },
        "excited" => rsx! { Icon { icon: FaFaceLaugh, width: 24, height: 24 } },
        "sad" => rsx! { Icon { icon: FaFaceFrown, width: 24, height: 24 } },
        "angry" => rsx! { Icon { icon: FaFaceAngry, width: 24, height: 24 } },
        _ => rsx! { Icon { icon: FaFaceMeh, width: 24, height: 24 } },
    }
}

/// A mood icon plus its capitalized label. Stateless; the caller decides
/// what clicking means.
#[component]
pub fn MoodCard(
    mood: String,
    #[props(default = false)] selected: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        document::Stylesheet { href: crate::COMPONENTS_CSS }

        button {
            class: if selected {
                "mood-card mood-card--selected"
            } else {
                "mood-card"
            },
            onclick: move |evt| on_click.call(evt),
            div {
                class: "mood-card-icon",
                {mood_icon(&mood)}
            }
            span { class: "mood-card-label", "{capitalize_first_letter(&mood)}" }
        }
    }
}
