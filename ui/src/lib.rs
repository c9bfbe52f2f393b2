//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");

mod auth;
pub use auth::{load_session_from_storage, store_session, use_auth, AuthProvider, AuthState};

pub mod format;
pub use format::{capitalize_first_letter, format_quote};

mod bottom_nav;
pub use bottom_nav::{is_active, nav_links, BottomNav, NavLink};

mod mood_card;
pub use mood_card::MoodCard;

mod inbox;
pub use inbox::{toggle_completion, Inbox};

mod card;
pub use card::{Card, CardIcon};
