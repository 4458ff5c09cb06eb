//! Todo List Component
//!
//! The list body, showing the items visible under the active filter.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{store_filtered, use_todo_store};

/// List of visible todos, one row per item
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    let visible_todos = move || store_filtered(&store);

    view! {
        <section class="main">
            <ul class="todo-list">
                <For
                    each=visible_todos
                    key=|todo| {
                        // Use a tuple of all mutable fields to ensure changes cause re-render
                        (todo.id, todo.title.clone(), todo.completed)
                    }
                    children=move |todo| {
                        view! { <TodoItem todo=todo /> }
                    }
                />
            </ul>
        </section>
    }
}
