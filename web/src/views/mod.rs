mod app_shell;
pub use app_shell::AppShell;

mod home;
pub use home::Home;

mod explore;
pub use explore::Explore;

mod journal_add;
pub use journal_add::JournalAdd;

mod journal_entries;
pub use journal_entries::JournalEntries;

mod reviews;
pub use reviews::Reviews;
