//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: watchers of the
//! list are not re-run by filter changes and vice versa.

use crate::list;
use crate::models::{Filter, Todo};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// The canonical list, in insertion order
    pub todos: Vec<Todo>,
    /// The active view filter. Never persisted.
    pub filter: Filter,
}

impl TodoState {
    /// State seeded with a previously persisted list
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a new item built from `title`; titles that trim to empty are ignored
pub fn store_add_todo(store: &TodoStore, title: &str) {
    list::add(&mut store.todos().write(), title);
}

/// Flip completion on one item by ID
pub fn store_toggle_todo(store: &TodoStore, id: i64) {
    list::toggle_one(&mut store.todos().write(), id);
}

/// Complete every item, or clear all when everything is already done
pub fn store_toggle_all(store: &TodoStore) {
    list::toggle_all(&mut store.todos().write());
}

/// Rewrite one item's title by ID (trimmed; an empty result is kept)
pub fn store_update_title(store: &TodoStore, id: i64, title: &str) {
    list::update_title(&mut store.todos().write(), id, title);
}

/// Remove one item by ID
pub fn store_remove_todo(store: &TodoStore, id: i64) {
    list::remove_one(&mut store.todos().write(), id);
}

/// Remove every completed item
pub fn store_remove_completed(store: &TodoStore) {
    list::remove_completed(&mut store.todos().write());
}

/// Switch the active view filter
pub fn store_set_filter(store: &TodoStore, filter: Filter) {
    store.filter().set(filter);
}

/// Items visible under the active filter, in original order.
/// Tracks both the list and the filter.
pub fn store_filtered(store: &TodoStore) -> Vec<Todo> {
    list::filtered(&store.todos().read(), store.filter().get())
}

/// True when every item is completed (vacuously true when empty)
pub fn store_all_completed(store: &TodoStore) -> bool {
    list::all_completed(&store.todos().read())
}

/// Number of items still to do
pub fn store_active_count(store: &TodoStore) -> usize {
    list::active_count(&store.todos().read())
}
