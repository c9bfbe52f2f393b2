//! # API crate — wire models and REST client for the Daybook backend
//!
//! This crate is the data layer shared by every Daybook frontend. It owns the
//! JSON wire models, the pure selection logic the dashboard is built on, and
//! a thin [`reqwest`] client for the journaling backend (an external service;
//! nothing in this workspace implements it).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire models (`User`, `Journal`, `Todo`) plus the pure helpers that pick the latest journal and compute todo clean-ups |
//! | [`client`] | [`ApiClient`] — bearer-authenticated HTTP calls for the user profile, journal list, and todo replacement |
//! | [`config`] | [`ApiConfig`] — resolves the backend base URL per platform |
//! | [`error`] | [`ApiError`] — transport and status failures |
//!
//! All client calls are best-effort: no retries, no timeouts beyond the
//! [`reqwest`] defaults. Callers decide what a failure means for their UI.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ApiClient, Session};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    cleanup_plan, latest_journal, pending_todos, recent_journals, Journal, Todo, User,
};
