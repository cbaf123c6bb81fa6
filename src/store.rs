//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use my_list_core::Item;

/// View state of the host page
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the item list, newest first
    pub items: Vec<Item>,
    /// Reveals per-item delete controls
    pub edit_mode: bool,
    /// Navigation panel visibility
    pub menu_open: bool,
}

impl AppState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
