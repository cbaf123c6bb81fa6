//! List Header Component
//!
//! Menu button, title with item count, and edit-mode toggle.

use leptos::prelude::*;
use my_list_core::count_label;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ListHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let edit_class = move || {
        if store.edit_mode().get() {
            "icon-btn edit-btn active"
        } else {
            "icon-btn edit-btn"
        }
    };

    view! {
        <header class="list-header">
            <button class="icon-btn menu-btn" title="Menu" on:click=move |_| ctx.open_menu()>
                "☰"
            </button>

            <div class="list-title">
                <h1>"My List"</h1>
                <p class="item-count">{move || store.items().with(|items| count_label(items.len()))}</p>
            </div>

            <button class=edit_class title="Edit" on:click=move |_| ctx.toggle_edit_mode()>
                "✎"
            </button>
        </header>
    }
}
