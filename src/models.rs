//! Domain Models
//!
//! Data structures shared by the store and the storage slot.

use serde::{Deserialize, Serialize};

/// To-do item (matches the persisted JSON shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Which slice of the list the view shows. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether the item belongs to this view.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_serializes_to_flat_object() {
        let todo = Todo {
            id: 1692000000000,
            title: "Buy milk".to_string(),
            completed: false,
        };
        let value = serde_json::to_value(&todo).expect("serializable");
        assert_eq!(
            value,
            json!({"id": 1692000000000i64, "title": "Buy milk", "completed": false})
        );
    }

    #[test]
    fn test_filter_matches_by_completion() {
        let active = Todo {
            id: 1,
            title: "A".to_string(),
            completed: false,
        };
        let done = Todo {
            id: 2,
            title: "B".to_string(),
            completed: true,
        };

        assert!(Filter::All.matches(&active) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&active) && !Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&active) && Filter::Completed.matches(&done));
    }

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }
}
