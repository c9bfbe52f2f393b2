//! # Todo model and inbox clean-up logic
//!
//! A [`Todo`] is a single inbox item owned by a [`crate::models::User`]. The
//! backend creates todos; the client only reads them as part of the user
//! fetch, toggles completion flags, and persists the result as a full
//! replacement list (`PUT`), never as per-item patches.
//!
//! "Cleaning up" the inbox means dropping every completed todo by omission:
//! the pending subset becomes the new full list. [`cleanup_plan`] decides
//! whether that write is worth making at all: when no todo is completed the
//! replacement list would equal the current one, so no request is issued.

use serde::{Deserialize, Serialize};

/// A single actionable inbox item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub is_completed: bool,
}

/// The subset of `todos` that is still open.
pub fn pending_todos(todos: &[Todo]) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| !todo.is_completed)
        .cloned()
        .collect()
}

/// The replacement list a clean-up should persist, or `None` when the
/// clean-up would not change anything (no completed todos, including the
/// empty-inbox case).
///
/// When every todo is completed this returns `Some(vec![])`: an empty list is
/// a legitimate replacement and clears the server's copy.
pub fn cleanup_plan(todos: &[Todo]) -> Option<Vec<Todo>> {
    let pending = pending_todos(todos);
    if pending.len() == todos.len() {
        None
    } else {
        Some(pending)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str, is_completed: bool) -> Todo {
        Todo {
            id: None,
            title: title.to_string(),
            is_completed,
        }
    }

    #[test]
    fn test_pending_keeps_open_items_only() {
        let todos = vec![
            todo("water plants", false),
            todo("file taxes", true),
            todo("call mum", false),
        ];
        let pending = pending_todos(&todos);
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|t| !t.is_completed));
    }

    #[test]
    fn test_cleanup_removes_exactly_the_completed() {
        let todos = vec![
            todo("a", true),
            todo("b", false),
            todo("c", true),
            todo("d", false),
        ];
        let plan = cleanup_plan(&todos).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].title, "b");
        assert_eq!(plan[1].title, "d");
    }

    #[test]
    fn test_cleanup_of_empty_inbox_is_a_noop() {
        assert_eq!(cleanup_plan(&[]), None);
    }

    #[test]
    fn test_cleanup_with_nothing_completed_is_a_noop() {
        let todos = vec![todo("a", false), todo("b", false)];
        assert_eq!(cleanup_plan(&todos), None);
    }

    #[test]
    fn test_cleanup_with_everything_completed_persists_empty_list() {
        let todos = vec![todo("a", true), todo("b", true)];
        assert_eq!(cleanup_plan(&todos), Some(Vec::new()));
    }

    #[test]
    fn test_todo_wire_format() {
        let raw = r#"{"id": "t1", "title": "water plants", "isCompleted": true}"#;
        let parsed: Todo = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("t1"));
        assert!(parsed.is_completed);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["isCompleted"], true);
    }
}
