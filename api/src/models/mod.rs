//! Data models for the application.

mod journal;
mod todo;
mod user;

pub use journal::{latest_journal, parse_journal_date, recent_journals, Journal, RECENT_WINDOW};
pub use todo::{cleanup_plan, pending_todos, Todo};
pub use user::User;
