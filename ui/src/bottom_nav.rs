//! Bottom navigation between the app sections.
//!
//! The component is stateless: it derives each tab's active look from the
//! current route path and delegates the actual navigation to the host
//! through `on_navigate`.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBook, FaBookOpen, FaCalendarDays, FaCompass, FaStar,
};
use dioxus_free_icons::Icon;

/// A bottom-nav destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

/// The five app sections, in display order.
pub fn nav_links() -> [NavLink; 5] {
    [
        NavLink {
            name: "Inbox",
            path: "/home",
        },
        NavLink {
            name: "Explore",
            path: "/explore",
        },
        NavLink {
            name: "Add",
            path: "/journal/add",
        },
        NavLink {
            name: "Entries",
            path: "/journal/entries",
        },
        NavLink {
            name: "Review",
            path: "/reviews",
        },
    ]
}

/// A link is active only on an exact path match, never on a prefix.
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    link_path == current_path
}

fn nav_icon(path: &str) -> Element {
    match path {
        "/home" => rsx! { Icon { icon: FaCalendarDays, width: 18, height: 18 } },
        "/explore" => rsx! { Icon { icon: FaCompass, width: 18, height: 18 } },
        "/journal/add" => rsx! { Icon { icon: FaBook, width: 18, height: 18 } },
        "/journal/entries" => rsx! { Icon { icon: FaBookOpen, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: FaStar, width: 18, height: 18 } },
    }
}

#[component]
pub fn BottomNav(current_path: String, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        document::Stylesheet { href: crate::COMPONENTS_CSS }

        nav {
            class: "bottom-nav",
            ul {
                class: "bottom-nav-tabs",
                for link in nav_links() {
                    li {
                        key: "{link.path}",
                        button {
                            class: if is_active(link.path, &current_path) {
                                "bottom-nav-tab bottom-nav-tab--active"
                            } else {
                                "bottom-nav-tab"
                            },
                            onclick: move |_| on_navigate.call(link.path.to_string()),
                            {nav_icon(link.path)}
                            span { "{link.name}" }
                        }
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
