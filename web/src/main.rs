use dioxus::prelude::*;

use ui::AuthProvider;
use views::{AppShell, Explore, Home, JournalAdd, JournalEntries, Reviews};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(AppShell)]
        #[route("/home")]
        Home {},
        #[route("/explore")]
        Explore {},
        #[route("/journal/add")]
        JournalAdd {},
        #[route("/journal/entries")]
        JournalEntries {},
        #[route("/reviews")]
        Reviews {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/home`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
