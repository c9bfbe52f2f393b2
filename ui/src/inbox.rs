//! Inbox list of todos with per-item completion toggling.
//!
//! Persistence belongs to the parent: toggling an item emits the *full*
//! updated list through `on_update`, matching the backend's replace-the-list
//! write model.

use api::Todo;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCheck;
use dioxus_free_icons::Icon;

/// `todos` with the completion flag at `index` flipped. Out-of-range indices
/// leave the list unchanged.
pub fn toggle_completion(todos: &[Todo], index: usize) -> Vec<Todo> {
    let mut updated = todos.to_vec();
    if let Some(todo) = updated.get_mut(index) {
        todo.is_completed = !todo.is_completed;
    }
    updated
}

#[component]
pub fn Inbox(todos: Vec<Todo>, on_update: EventHandler<Vec<Todo>>) -> Element {
    if todos.is_empty() {
        return rsx! {
            document::Stylesheet { href: crate::COMPONENTS_CSS }
            p { class: "inbox-empty", "Nothing in your inbox." }
        };
    }

    rsx! {
        document::Stylesheet { href: crate::COMPONENTS_CSS }

        ul {
            class: "inbox-list",
            for (index, todo) in todos.clone().into_iter().enumerate() {
                InboxItem {
                    key: "{index}",
                    index,
                    todo,
                    todos: todos.clone(),
                    on_update,
                }
            }
        }
    }
}

#[component]
fn InboxItem(
    index: usize,
    todo: Todo,
    todos: Vec<Todo>,
    on_update: EventHandler<Vec<Todo>>,
) -> Element {
    let toggle = move |_| on_update.call(toggle_completion(&todos, index));

    rsx! {
        li {
            class: if todo.is_completed {
                "inbox-item inbox-item--done"
            } else {
                "inbox-item"
            },
            button {
                class: "inbox-check",
                onclick: toggle,
                if todo.is_completed {
                    Icon { icon: FaCheck, width: 12, height: 12 }
                }
            }
            span { class: "inbox-title", "{todo.title}" }
        }
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
    fn test_toggle_flips_only_the_target() {
        let todos = vec![todo("a", false), todo("b", true)];
        let updated = toggle_completion(&todos, 0);
        assert!(updated[0].is_completed);
        assert!(updated[1].is_completed);
        assert_eq!(updated.len(), 2);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let todos = vec![todo("a", false), todo("b", true)];
        let twice = toggle_completion(&toggle_completion(&todos, 1), 1);
        assert_eq!(twice, todos);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let todos = vec![todo("a", false)];
        assert_eq!(toggle_completion(&todos, 5), todos);
    }
}
