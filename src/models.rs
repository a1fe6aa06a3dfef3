//! Frontend Models
//!
//! Data structures for both list variants and the list service payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Server-assigned todo id
pub type TodoId = u64;

/// Todo record as returned by the list service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub label: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_done: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Body for creating a todo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo<'a> {
    pub label: &'a str,
    pub is_done: bool,
}

impl<'a> NewTodo<'a> {
    pub fn pending(label: &'a str) -> Self {
        Self { label, is_done: false }
    }
}

/// User record from `GET /users/{user}`.
///
/// Only `todos` is consumed, and it is kept as raw JSON so a missing list
/// or a malformed entry degrades instead of failing the whole load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub todos: Value,
}

impl UserRecord {
    /// Decode `todos`, or `None` when it is missing or not a list.
    ///
    /// Entries that do not decode as a todo are skipped.
    pub fn todos(&self) -> Option<Vec<Todo>> {
        let Value::Array(entries) = &self.todos else {
            return None;
        };
        let todos = entries
            .iter()
            .filter_map(|entry| match Todo::deserialize(entry) {
                Ok(todo) => Some(todo),
                Err(e) => {
                    log::warn!("skipping malformed todo {}: {}", entry, e);
                    None
                }
            })
            .collect();
        Some(todos)
    }
}

/// Entry in the local-only list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTodo {
    /// Synthetic id, unique within its list
    pub id: u32,
    pub text: String,
}

/// Footer text: "1 item left", "N items left", nothing for an empty list
pub fn items_left(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 item left".to_string()),
        n => Some(format!("{} items left", n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_left() {
        assert_eq!(items_left(0), None);
        assert_eq!(items_left(1).as_deref(), Some("1 item left"));
        assert_eq!(items_left(2).as_deref(), Some("2 items left"));
        assert_eq!(items_left(11).as_deref(), Some("11 items left"));
    }

    #[test]
    fn test_user_record_todos() {
        let record: UserRecord = serde_json::from_value(json!({
            "name": "Gemini",
            "id": 7,
            "todos": [
                { "id": 1, "label": "walk", "is_done": false },
                { "id": 2, "label": "read", "is_done": true }
            ]
        }))
        .unwrap();

        let todos = record.todos().unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1], Todo { id: 2, label: "read".into(), is_done: true });
    }

    #[test]
    fn test_user_record_missing_or_malformed_todos() {
        let missing: UserRecord = serde_json::from_value(json!({ "name": "Gemini" })).unwrap();
        assert_eq!(missing.todos(), None);

        let null: UserRecord = serde_json::from_value(json!({ "todos": null })).unwrap();
        assert_eq!(null.todos(), None);

        let object: UserRecord = serde_json::from_value(json!({ "todos": { "id": 1 } })).unwrap();
        assert_eq!(object.todos(), None);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let record: UserRecord = serde_json::from_value(json!({
            "todos": [
                { "id": 1, "label": "ok" },
                { "id": 2 },
                { "nope": true },
                { "id": 3, "label": "null done", "is_done": null }
            ]
        }))
        .unwrap();

        let todos = record.todos().unwrap();
        assert_eq!(
            todos,
            vec![
                Todo { id: 1, label: "ok".into(), is_done: false },
                Todo { id: 3, label: "null done".into(), is_done: false },
            ]
        );
    }

    #[test]
    fn test_is_done_defaults_to_false() {
        let todo: Todo = serde_json::from_value(json!({ "id": 3, "label": "x" })).unwrap();
        assert!(!todo.is_done);
    }

    #[test]
    fn test_new_todo_body() {
        let body = serde_json::to_value(NewTodo::pending("buy milk")).unwrap();
        assert_eq!(body, json!({ "label": "buy milk", "is_done": false }));
    }
}
