//! The dashboard: greeting, latest-journal cards, quote, and the todo inbox.
//!
//! This view owns the data orchestration. On mount (and again whenever the
//! authenticated identity changes) it fetches the user profile and the
//! journal list concurrently, reduces the journals to the single latest one,
//! and mediates todo mutations between the [`Inbox`] component and the
//! backend.

use api::{cleanup_plan, latest_journal, ApiClient, ApiConfig, Journal, Todo, User};
use dioxus::prelude::*;
use futures_util::future;
use ui::{format_quote, use_auth, Card, CardIcon, Inbox};

use crate::Route;

const DEFAULT_QUOTE: &str = "Excitement is a better motivator than discipline.";
const DEFAULT_TIP: &str = "Tips: Everyday is a good day to start";

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let mut user = use_signal(|| Option::<User>::None);
    let mut journal = use_signal(|| Option::<Journal>::None);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);

    // Both fetches run concurrently and unordered; the view is ready only
    // once both have settled. Restarting (identity change, retry) drops the
    // in-flight future, so a stale response never overwrites fresher state.
    let mut loader = use_resource(move || {
        let state = auth();
        async move {
            if state.loading {
                return;
            }
            let Some(session) = state.session else {
                loading.set(false);
                return;
            };
            loading.set(true);
            load_error.set(None);

            let client = ApiClient::new(&ApiConfig::default(), session);
            let (fetched_user, fetched_journals) =
                future::join(client.fetch_user(), client.fetch_journals()).await;

            match fetched_user {
                Ok(active) => user.set(active),
                Err(err) => {
                    tracing::error!(%err, "could not get user");
                    load_error.set(Some("Could not load your profile.".to_string()));
                }
            }
            match fetched_journals {
                Ok(journals) => journal.set(latest_journal(journals)),
                Err(err) => {
                    tracing::error!(%err, "error fetching the journal");
                    load_error.set(Some("Could not load your journal.".to_string()));
                }
            }

            loading.set(false);
        }
    });

    // Persist a full replacement list, then trust our own write locally. A
    // failed write is logged and leaves local state as it was.
    let handle_update_todo = move |updated: Vec<Todo>| {
        let Some(session) = auth().session else {
            return;
        };
        spawn(async move {
            let client = ApiClient::new(&ApiConfig::default(), session);
            match client.replace_todos(&updated).await {
                Ok(()) => {
                    if let Some(current) = user() {
                        user.set(Some(User {
                            todo: updated,
                            ..current
                        }));
                    }
                }
                Err(err) => tracing::error!(%err, "error updating todos"),
            }
        });
    };

    // Drop completed todos by omission. Skipped entirely when nothing is
    // completed, so an unchanged list is never re-written.
    let handle_clean_up = move |_: MouseEvent| {
        let Some(current) = user() else {
            return;
        };
        if let Some(pending) = cleanup_plan(&current.todo) {
            handle_update_todo(pending);
        }
    };

    if loading() {
        return rsx! {
            div { class: "home-loading" }
        };
    }

    let greeting_name = user()
        .map(|u| u.name)
        .unwrap_or_else(|| "Loading...".to_string());
    let current_journal = journal();
    let key_insight = current_journal
        .as_ref()
        .and_then(|j| j.key_insight.clone())
        .unwrap_or_else(|| DEFAULT_TIP.to_string());
    let quote = current_journal
        .as_ref()
        .and_then(|j| j.quote.clone())
        .map(|q| format_quote(&q))
        .unwrap_or_else(|| DEFAULT_QUOTE.to_string());
    let todos = user().map(|u| u.todo).unwrap_or_default();
    let has_user = user().is_some();

    rsx! {
        main {
            class: "home",

            if let Some(message) = load_error() {
                div {
                    class: "home-error",
                    span { "{message}" }
                    button {
                        class: "home-error-retry",
                        onclick: move |_| loader.restart(),
                        "Retry"
                    }
                }
            }

            header {
                class: "home-header",
                div {
                    class: "home-greeting",
                    p { "Hello," }
                    p { "{greeting_name}" }
                }
            }

            section {
                class: "home-cards",
                Link {
                    to: Route::JournalAdd {},
                    Card {
                        text: "Enter Your Daily Journal",
                        icon: CardIcon::Book,
                        class: "card--journal",
                    }
                }
                Card {
                    text: "{DEFAULT_TIP}",
                    icon: CardIcon::Lightbulb,
                    class: "card--tips",
                }
                Card {
                    text: "{key_insight}",
                    icon: CardIcon::Lightbulb,
                    class: "card--insight",
                }
            }

            article {
                class: "home-quote",
                p { "{quote}" }
            }

            section {
                class: "home-inbox",
                div {
                    class: "home-inbox-header",
                    h3 { "Inbox" }
                    button {
                        class: "home-cleanup",
                        onclick: handle_clean_up,
                        "Clean up Tasks"
                    }
                }
                if has_user {
                    Inbox {
                        todos,
                        on_update: handle_update_todo,
                    }
                }
            }
        }
    }
}
