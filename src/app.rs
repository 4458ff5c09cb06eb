//! Todos Frontend App
//!
//! Main application component: builds the store from the storage slot,
//! provides it to all children, and owns the persistence effect.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Footer, Header, TodoList};
use crate::context::AppContext;
use crate::storage;
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State, rehydrated once at startup; an absent or unreadable slot
    // loads as an empty list
    let store = Store::new(TodoState::new(storage::load_todos()));

    let (focus_epoch, set_focus_epoch) = signal(0u32);
    let ctx = AppContext::new((focus_epoch, set_focus_epoch));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Persist after every list change, then hand focus back to the header
    // input. Watches only the `todos` field, so filter switches never
    // rewrite the slot.
    Effect::new(move |_| {
        let todos = store.todos().get();
        storage::save_todos(&todos);
        ctx.request_focus();
    });

    let has_todos = move || !store.todos().read().is_empty();

    view! {
        <section class="todoapp">
            <Header />

            <TodoList />

            // Footer only exists while there are items
            <Show when=has_todos>
                <Footer />
            </Show>
        </section>
    }
}
