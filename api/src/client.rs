//! # REST client for the journaling backend
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] together with the backend base
//! URL and the authenticated [`Session`]. It exposes the three calls the
//! dashboard needs:
//!
//! | Method | HTTP | Path |
//! |--------|------|------|
//! | [`fetch_user`](ApiClient::fetch_user) | GET | `/api/users/{userId}` (bearer auth) |
//! | [`fetch_journals`](ApiClient::fetch_journals) | GET | `/api/users/{userId}/journals` |
//! | [`replace_todos`](ApiClient::replace_todos) | PUT | `/api/users/{userId}/todo/` |
//!
//! The user endpoint returns an *array* of users; the first element is the
//! active user. Todo persistence is a full-list replacement, which makes the
//! call idempotent. Non-2xx responses map to [`ApiError::Status`]; transport
//! and body-decode failures to [`ApiError::Transport`].

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Journal, Todo, User};

/// The authenticated identity, passed in explicitly by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub token: String,
}

/// HTTP client for the Daybook backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch the active user: first element of the backend's user array,
    /// `None` when the array is empty.
    pub async fn fetch_user(&self) -> Result<Option<User>, ApiError> {
        let url = format!("{}{}", self.base_url, endpoints::user(&self.session.user_id));
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.session.token)
            .send()
            .await?;
        let users: Vec<User> = ok(response)?.json().await?;
        Ok(users.into_iter().next())
    }

    /// Fetch all journals for the session user.
    pub async fn fetch_journals(&self) -> Result<Vec<Journal>, ApiError> {
        let url = format!(
            "{}{}",
            self.base_url,
            endpoints::journals(&self.session.user_id)
        );
        let response = self.http.get(&url).send().await?;
        Ok(ok(response)?.json().await?)
    }

    /// Replace the session user's todo list wholesale.
    pub async fn replace_todos(&self, todos: &[Todo]) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, endpoints::todos(&self.session.user_id));
        let response = self.http.put(&url).json(todos).send().await?;
        ok(response)?;
        Ok(())
    }
}

fn ok(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}

mod endpoints {
    pub fn user(user_id: &str) -> String {
        format!("/api/users/{user_id}")
    }

    pub fn journals(user_id: &str) -> String {
        format!("/api/users/{user_id}/journals")
    }

    pub fn todos(user_id: &str) -> String {
        format!("/api/users/{user_id}/todo/")
    }
}
