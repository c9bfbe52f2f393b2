//! Authentication context and hooks for the UI.
//!
//! The session (user id + bearer token) is an explicit input: views read it
//! through [`use_auth`], and [`AuthProvider`] resolves it once on mount,
//! from the `session` prop when the host passes one, otherwise from whatever
//! a previous visit left in browser storage. Nothing here reaches into
//! ambient globals, and session issuance (login) is the backend's concern.

use api::Session;
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the identity has been resolved (present or not).
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the identity changes.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(
    #[props(default = None)] session: Option<Session>,
    children: Element,
) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Resolve the identity once on mount: an explicitly passed session wins
    // and is persisted; otherwise restore from storage.
    let initial = session.clone();
    use_effect(move || {
        let resolved = match initial.clone() {
            Some(session) => {
                store_session(&session);
                Some(session)
            }
            None => load_session_from_storage(),
        };
        if let Some(ref session) = resolved {
            tracing::debug!(user_id = %session.user_id, "session resolved");
        }
        auth_state.set(AuthState {
            session: resolved,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
const SESSION_STORAGE_KEY: &str = "daybook.session";

#[cfg(target_arch = "wasm32")]
#[derive(serde::Serialize, serde::Deserialize)]
struct StoredSession {
    user_id: String,
    token: String,
}

/// Restore the session a previous visit persisted, if any.
#[cfg(target_arch = "wasm32")]
pub fn load_session_from_storage() -> Option<Session> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
    let stored: StoredSession = serde_json::from_str(&raw).ok()?;
    Some(Session {
        user_id: stored.user_id,
        token: stored.token,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_session_from_storage() -> Option<Session> {
    None
}

/// Persist the session for the next visit.
#[cfg(target_arch = "wasm32")]
pub fn store_session(session: &Session) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let stored = StoredSession {
        user_id: session.user_id.clone(),
        token: session.token.clone(),
    };
    if let Ok(raw) = serde_json::to_string(&stored) {
        let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn store_session(_session: &Session) {}
