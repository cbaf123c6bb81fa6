//! Item Row Component
//!
//! A single list entry with its completion toggle and, in edit mode, a
//! delete button.

use leptos::prelude::*;
use my_list_core::Item;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let completed = item.completed;
    let toggle_id = item.id.clone();
    let delete_id = item.id;

    view! {
        <div class=if completed { "item-row completed" } else { "item-row" }>
            // Complete toggle
            <button
                class=if completed { "toggle-btn checked" } else { "toggle-btn" }
                on:click=move |_| ctx.toggle_item(&toggle_id)
            >
                {completed.then_some("✓")}
            </button>

            <p class="item-text">{item.text}</p>

            // Delete button (edit mode only)
            {move || store.edit_mode().get().then(|| {
                let id = delete_id.clone();
                view! {
                    <button class="delete-btn" on:click=move |_| ctx.delete_item(&id)>"×"</button>
                }
            })}
        </div>
    }
}
