//! Application Context
//!
//! Shared handle provided via Leptos Context API. Every list mutation goes
//! through the persisted [`ItemListStore`] first and is then mirrored into
//! the reactive [`AppStore`].

use leptos::prelude::*;
use my_list_core::{ItemId, ItemListStore, KeyValueListRepository};

use crate::storage::BrowserStorage;
use crate::store::{AppStateStoreFields, AppStore};

pub type ListStore = ItemListStore<KeyValueListRepository<BrowserStorage>>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    list: StoredValue<ListStore>,
    /// Reactive view state
    pub store: AppStore,
}

impl AppContext {
    pub fn new(list: ListStore, store: AppStore) -> Self {
        Self {
            list: StoredValue::new(list),
            store,
        }
    }

    /// Copy the persisted list into the reactive store
    fn sync(&self) {
        let items = self.list.with_value(|list| list.items().to_vec());
        *self.store.items().write() = items;
    }

    /// Add an item; false when the text was blank
    pub fn add_item(&self, text: &str) -> bool {
        let added = self
            .list
            .try_update_value(|list| list.add_item(text))
            .flatten();
        if added.is_some() {
            self.sync();
        }
        added.is_some()
    }

    pub fn toggle_item(&self, id: &ItemId) {
        if self.list.try_update_value(|list| list.toggle_complete(id)) == Some(true) {
            self.sync();
        }
    }

    pub fn delete_item(&self, id: &ItemId) {
        if self.list.try_update_value(|list| list.delete_item(id)) == Some(true) {
            self.sync();
        }
    }

    pub fn toggle_edit_mode(&self) {
        self.store.edit_mode().update(|on| *on = !*on);
    }

    pub fn open_menu(&self) {
        self.store.menu_open().set(true);
    }

    pub fn close_menu(&self) {
        self.store.menu_open().set(false);
    }
}
