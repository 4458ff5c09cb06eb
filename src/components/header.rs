//! Header Component
//!
//! The new-todo form and the toggle-all control.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::store::{store_add_todo, store_all_completed, store_toggle_all, use_todo_store};

/// DOM id of the new-todo input, for focus restoration
const NEW_TODO_INPUT_ID: &str = "new-todo-input";

/// Header with the toggle-all button and the creation form
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    let (draft, set_draft) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = draft.get();
        if title.trim().is_empty() {
            return;
        }
        store_add_todo(&store, &title);
        set_draft.set(String::new());
    };

    // Pull focus back to the input one tick after every list change
    // (and once on startup)
    Effect::new(move |_| {
        let _ = ctx.focus_epoch.get();
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            focus_new_todo_input();
        });
    });

    let toggle_all_class = move || {
        if store_all_completed(&store) {
            "toggle-all active"
        } else {
            "toggle-all"
        }
    };

    view! {
        <header class="header">
            <h1>"todos"</h1>

            <button
                type="button"
                class=toggle_all_class
                on:click=move |_| store_toggle_all(&store)
            >
                "❯"
            </button>

            <form on:submit=on_submit>
                <input
                    id=NEW_TODO_INPUT_ID
                    type="text"
                    class="new-todo"
                    placeholder="What needs to be done?"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
            </form>
        </header>
    }
}

/// Move keyboard focus to the new-todo input, if it is mounted
fn focus_new_todo_input() {
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            if let Some(el) = doc.get_element_by_id(NEW_TODO_INPUT_ID) {
                if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
        }
    }
}
