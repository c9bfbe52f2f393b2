//! Layout shared by every app section: the section's content plus the
//! bottom navigation.

use dioxus::prelude::*;

use ui::BottomNav;

use crate::Route;

fn route_for_path(path: &str) -> Route {
    match path {
        "/explore" => Route::Explore {},
        "/journal/add" => Route::JournalAdd {},
        "/journal/entries" => Route::JournalEntries {},
        "/reviews" => Route::Reviews {},
        _ => Route::Home {},
    }
}

#[component]
pub fn AppShell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let current_path = route.to_string();

    rsx! {
        div {
            class: "app-shell",
            Outlet::<Route> {}
            nav {
                class: "app-shell-bottom",
                BottomNav {
                    current_path,
                    on_navigate: move |path: String| {
                        nav.push(route_for_path(&path));
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_destination_maps_to_its_route() {
        assert_eq!(route_for_path("/home"), Route::Home {});
        assert_eq!(route_for_path("/explore"), Route::Explore {});
        assert_eq!(route_for_path("/journal/add"), Route::JournalAdd {});
        assert_eq!(route_for_path("/journal/entries"), Route::JournalEntries {});
        assert_eq!(route_for_path("/reviews"), Route::Reviews {});
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(route_for_path("/nowhere"), Route::Home {});
    }
}
