//! Persistent Storage
//!
//! The whole list lives in a single key-value slot as a JSON array. In the
//! browser the slot is `window.localStorage`; native builds (the test
//! harness) get an in-process map behind the same two calls.

use crate::models::Todo;

/// Key of the storage slot holding the serialized list
pub const STORAGE_KEY: &str = "todos";

/// Read the list back from the slot.
///
/// An absent slot, or one whose contents fail to parse, loads as an empty
/// list rather than poisoning the session.
pub fn load_todos() -> Vec<Todo> {
    let Some(raw) = backend::read(STORAGE_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(todos) => todos,
        Err(err) => {
            warn(&format!("discarding unreadable todo list: {}", err));
            Vec::new()
        }
    }
}

/// Write the full list into the slot, replacing the previous value.
pub fn save_todos(todos: &[Todo]) {
    match serde_json::to_string(todos) {
        Ok(json) => backend::write(STORAGE_KEY, &json),
        Err(err) => warn(&format!("failed to serialize todo list: {}", err)),
    }
}

fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}

#[cfg(target_arch = "wasm32")]
mod backend {
    /// `None` when storage is unavailable (blocked by the user agent) or
    /// the key is absent.
    pub fn read(key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    pub fn write(key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            web_sys::console::warn_1(&format!("storage write for `{}` rejected", key).into());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static SLOTS: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        SLOTS.with(|slots| slots.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        SLOTS.with(|slots| {
            slots.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;

    fn make_todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn test_round_trips_the_full_list() {
        let todos = vec![
            make_todo(1692000000001, "Buy milk", true),
            make_todo(1692000000002, "Walk dog", false),
        ];
        save_todos(&todos);
        assert_eq!(load_todos(), todos);
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        assert_eq!(load_todos(), Vec::new());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        backend::write(STORAGE_KEY, "{not json");
        assert_eq!(load_todos(), Vec::new());
    }

    #[test]
    fn test_wrong_shape_slot_loads_empty() {
        backend::write(STORAGE_KEY, r#"{"id": 1}"#);
        assert_eq!(load_todos(), Vec::new());
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        save_todos(&[make_todo(1, "Old", false)]);
        save_todos(&[make_todo(2, "New", false)]);
        let loaded = load_todos();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "New");
    }
}
