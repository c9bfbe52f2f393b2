//! User model.
//!
//! The backend returns the full user record; every field except the todo list
//! is read-only on the client. The todo list is the one thing the dashboard
//! mutates, always as a wholesale replacement (see [`crate::ApiClient::replace_todos`]).

use serde::{Deserialize, Serialize};

use super::Todo;

/// A Daybook user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub journals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habits: Option<Vec<String>>,
    #[serde(default)]
    pub todo: Vec<Todo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_format_with_optionals_missing() {
        let raw = r#"{
            "name": "Robin",
            "username": "robin",
            "email": "robin@example.com",
            "journals": ["j1"],
            "todo": [{"title": "water plants", "isCompleted": false}]
        }"#;
        let parsed: User = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.name, "Robin");
        assert_eq!(parsed.habits, None);
        assert_eq!(parsed.todo.len(), 1);
        assert!(!parsed.todo[0].is_completed);
    }

    #[test]
    fn test_user_wire_format_minimal() {
        let raw = r#"{"name": "R", "username": "r", "email": "r@example.com"}"#;
        let parsed: User = serde_json::from_str(raw).unwrap();
        assert!(parsed.journals.is_empty());
        assert!(parsed.todo.is_empty());
    }
}
