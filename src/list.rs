//! List Operations
//!
//! Pure functions over the to-do list. Plain data in, plain data out, so
//! every rule here is testable without a browser.

use crate::models::{Filter, Todo};

/// Append a new item built from the trimmed title
/// Returns the new item's id, or None when the title trims to empty
pub fn add(todos: &mut Vec<Todo>, title: &str) -> Option<i64> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let id = next_id(todos);
    todos.push(Todo {
        id,
        title: title.to_string(),
        completed: false,
    });
    Some(id)
}

/// Flip `completed` on the matching item; unknown ids are ignored
pub fn toggle_one(todos: &mut [Todo], id: i64) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
        todo.completed = !todo.completed;
    }
}

/// Complete every item, unless all are already completed - then clear all
pub fn toggle_all(todos: &mut [Todo]) {
    let target = !all_completed(todos);
    for todo in todos.iter_mut() {
        todo.completed = target;
    }
}

/// Replace the matching item's title with the trimmed value; unknown ids
/// are ignored. Unlike [`add`], a title that trims to empty is stored.
pub fn update_title(todos: &mut [Todo], id: i64, title: &str) {
    if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
        todo.title = title.trim().to_string();
    }
}

/// Remove the matching item; unknown ids are ignored
pub fn remove_one(todos: &mut Vec<Todo>, id: i64) {
    todos.retain(|t| t.id != id);
}

/// Remove every completed item, keeping the rest in order
pub fn remove_completed(todos: &mut Vec<Todo>) {
    todos.retain(|t| !t.completed);
}

/// Items visible under `filter`, in original order
pub fn filtered(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    todos
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

/// True when every item is completed; vacuously true for an empty list
pub fn all_completed(todos: &[Todo]) -> bool {
    todos.iter().all(|t| t.completed)
}

/// Number of items still to do
pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.completed).count()
}

/// Allocate a creation-timestamp id, bumped past the current maximum so
/// two items created in the same millisecond still get distinct ids.
fn next_id(todos: &[Todo]) -> i64 {
    let floor = todos.iter().map(|t| t.id + 1).max().unwrap_or(0);
    now_ms().max(floor)
}

/// Milliseconds since the Unix epoch, from the browser clock
#[cfg(target_arch = "wasm32")]
fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Milliseconds since the Unix epoch, from the system clock
#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
