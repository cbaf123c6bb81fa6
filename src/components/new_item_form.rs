//! New Item Form Component
//!
//! Bottom input bar; submits on Enter or the add button.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let can_submit = move || !new_text.get().trim().is_empty();

    let focus_input = move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    let add_item = move || {
        if ctx.add_item(&new_text.get_untracked()) {
            set_new_text.set(String::new());
            focus_input();
        }
    };

    // Auto-focus input on load
    Effect::new(move |_| focus_input());

    view! {
        <div class="new-item-bar">
            <div class="new-item-row">
                <input
                    type="text"
                    node_ref=input_ref
                    placeholder="Add new item..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add_item();
                        }
                    }
                />
                <button
                    class=move || if can_submit() { "add-btn ready" } else { "add-btn" }
                    disabled=move || !can_submit()
                    on:click=move |_| add_item()
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
