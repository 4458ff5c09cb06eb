//! Footer Component
//!
//! Remaining-item count, filter switcher, and clear-completed.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{
    store_active_count, store_remove_completed, store_set_filter, use_todo_store,
    TodoStateStoreFields,
};

/// Filter options, in switcher order
const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

/// Footer with the active count and the view controls
#[component]
pub fn Footer() -> impl IntoView {
    let store = use_todo_store();

    let active_count = move || store_active_count(&store);
    let items_word = move || if active_count() == 1 { "item" } else { "items" };
    let any_completed = move || store.todos().read().iter().any(|t| t.completed);

    view! {
        <footer class="footer">
            // Remaining count
            <span class="todo-count">
                <strong>{move || active_count()}</strong>
                " "
                {move || items_word()}
                " left"
            </span>

            // Filter switcher
            <ul class="filters">
                {FILTERS
                    .iter()
                    .map(|&(filter, label)| {
                        let is_selected = move || store.filter().get() == filter;
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class=move || if is_selected() { "selected" } else { "" }
                                    on:click=move |_| store_set_filter(&store, filter)
                                >
                                    {label}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            // Purge completed items
            <Show when=any_completed>
                <button
                    class="clear-completed"
                    on:click=move |_| store_remove_completed(&store)
                >
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}
