//! Item List View Component
//!
//! Renders the list rows, or the empty state when there are none.

use leptos::prelude::*;

use crate::components::{EmptyState, ItemRow};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemListView() -> impl IntoView {
    let store = use_app_store();
    let has_items = move || store.items().with(|items| !items.is_empty());

    view! {
        <main class="list-content">
            <Show when=has_items fallback=|| view! { <EmptyState /> }>
                <div class="item-list">
                    // Keyed on completion too, so a toggled row re-renders
                    <For
                        each=move || store.items().get()
                        key=|item| (item.id.clone(), item.completed)
                        children=|item| view! { <ItemRow item=item /> }
                    />
                </div>
            </Show>
        </main>
    }
}
