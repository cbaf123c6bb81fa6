//! Navigation Panel Component
//!
//! Slide-in panel with account/info entries and the collection list.
//! Visibility is owned by the host: the panel only reads `is_open` and
//! reports close requests through `on_close`.

use leptos::prelude::*;
use my_list_core::{demo_collections, PanelAction, PanelActionHandler, UnwiredActions, MENU_ENTRIES};

/// Navigation panel
///
/// # Arguments
/// * `is_open` - Whether the panel is shown
/// * `on_close` - Called on backdrop click or the close button
/// * `on_action` - Receives panel actions; without it they go to [`UnwiredActions`]
#[component]
pub fn NavigationPanel(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] on_action: Option<Callback<PanelAction>>,
) -> impl IntoView {
    let dispatch = move |action: PanelAction| match on_action {
        Some(handler) => handler.run(action),
        None => {
            UnwiredActions.handle(&action);
        }
    };
    let collections = demo_collections();

    view! {
        <Show when=move || is_open.get()>
            <div class="panel-backdrop" on:click=move |_| on_close.run(())></div>

            <nav class="nav-panel">
                <div class="nav-panel-header">
                    <div class="nav-panel-brand">
                        <div class="nav-panel-logo">"📂"</div>
                        <div>
                            <h2>"My Lists"</h2>
                            <p class="nav-panel-subtitle">"Personal organizer"</p>
                        </div>
                    </div>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                // Main actions
                <div class="nav-panel-actions">
                    {MENU_ENTRIES.iter().map(|entry| {
                        let action = entry.action.clone();
                        view! {
                            <button class="menu-entry" on:click=move |_| dispatch(action.clone())>
                                <p class="menu-entry-title">{entry.title}</p>
                                <p class="menu-entry-subtitle">{entry.subtitle}</p>
                            </button>
                        }
                    }).collect_view()}
                </div>

                // Collections
                <div class="nav-panel-collections">
                    <h3>"Collections"</h3>
                    {collections.iter().map(|collection| {
                        let id = collection.id.clone();
                        view! {
                            <button
                                class="collection-entry"
                                on:click=move |_| dispatch(PanelAction::OpenCollection(id.clone()))
                            >
                                <span class=format!("collection-badge {}", collection.color_tag.as_str())>"📁"</span>
                                <span class="collection-name">{collection.name.clone()}</span>
                                <span class="collection-count">{collection.item_count}</span>
                            </button>
                        }
                    }).collect_view()}

                    <button class="new-collection-btn" on:click=move |_| dispatch(PanelAction::NewCollection)>
                        "New Collection"
                    </button>
                </div>
            </nav>
        </Show>
    }
}
