//! Todo Item Component
//!
//! A single row in the list: completion checkbox, editable title, destroy
//! button. Double-click the label to edit; Enter or blur commits, Escape
//! cancels.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::models::Todo;
use crate::store::{store_remove_todo, store_toggle_todo, store_update_title, use_todo_store};

/// A single todo row
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_todo_store();

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title.clone();
    let edit_id = format!("todo-edit-{}", id);

    let (editing, set_editing) = signal(false);
    let (edit_draft, set_edit_draft) = signal(String::new());

    let row_class = move || {
        let mut class = String::from("todo");
        if completed {
            class.push_str(" completed");
        }
        if editing.get() {
            class.push_str(" editing");
        }
        class
    };

    let start_editing = {
        let title = title.clone();
        let edit_id = edit_id.clone();
        move |_| {
            set_edit_draft.set(title.clone());
            set_editing.set(true);
            // Focus the edit field once the row has re-rendered
            let edit_id = edit_id.clone();
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                focus_input(&edit_id);
            });
        }
    };

    let commit = move || {
        store_update_title(&store, id, &edit_draft.get());
        set_editing.set(false);
    };

    let on_edit_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => commit(),
        "Escape" => set_editing.set(false),
        _ => {}
    };

    view! {
        <li class=row_class>
            <div class="view">
                // Checkbox
                <input
                    type="checkbox"
                    class="toggle"
                    checked=completed
                    on:change=move |_| store_toggle_todo(&store, id)
                />

                // Title
                <label on:dblclick=start_editing>{title.clone()}</label>

                // Destroy button
                <button class="destroy" on:click=move |_| store_remove_todo(&store, id)>
                    "×"
                </button>
            </div>

            <Show when=move || editing.get()>
                <input
                    id=edit_id.clone()
                    type="text"
                    class="edit"
                    prop:value=move || edit_draft.get()
                    on:input=move |ev| set_edit_draft.set(event_target_value(&ev))
                    on:keydown=on_edit_keydown
                    on:blur=move |_| commit()
                />
            </Show>
        </li>
    }
}

/// Move keyboard focus to the input with the given DOM id
fn focus_input(id: &str) {
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            if let Some(el) = doc.get_element_by_id(id) {
                if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        }
    }
}
