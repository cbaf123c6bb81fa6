//! My List App
//!
//! Header, item list, bottom input bar and the navigation panel.

use leptos::prelude::*;
use reactive_stores::Store;
use my_list_core::{ItemListStore, KeyValueListRepository, ListConfig};

use crate::components::{ItemListView, ListHeader, NavigationPanel, NewItemForm};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Restore the persisted list
    let list = ItemListStore::load(KeyValueListRepository::new(BrowserStorage, &ListConfig::default()));
    log::info!("[APP] Starting with {}", list.count_label());

    let store = Store::new(AppState::new(list.items().to_vec()));
    let ctx = AppContext::new(list, store);

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    view! {
        <div class="app-layout">
            <ListHeader />

            <NavigationPanel
                is_open=Signal::derive(move || store.menu_open().get())
                on_close={Callback::<()>::new(move |_| ctx.close_menu())}
            />

            <ItemListView />

            <NewItemForm />
        </div>
    }
}
