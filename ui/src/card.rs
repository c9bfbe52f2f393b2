//! Dashboard tile with an icon badge and a short text.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBook, FaLightbulb};
use dioxus_free_icons::Icon;

/// Icon badge shown on a [`Card`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardIcon {
    Book,
    Lightbulb,
}

#[component]
pub fn Card(
    text: String,
    icon: CardIcon,
    #[props(default = String::new())] class: String,
) -> Element {
    rsx! {
        document::Stylesheet { href: crate::COMPONENTS_CSS }

        div {
            class: "card {class}",
            div {
                class: "card-icon",
                {match icon {
                    CardIcon::Book => rsx! { Icon { icon: FaBook, width: 18, height: 18 } },
                    CardIcon::Lightbulb => rsx! { Icon { icon: FaLightbulb, width: 18, height: 18 } },
                }}
            }
            p { class: "card-text", "{text}" }
        }
    }
}
