//! Item List Store
//!
//! Owns the ordered item list (newest first) and mirrors it to a
//! [`ListRepository`] after every change.

mod clock;
mod ids;

pub use clock::{Clock, SystemClock};
pub use ids::IdGenerator;

use crate::domain::{Entity, Item, ItemId};
use crate::repository::ListRepository;

/// "1 item" / "N items"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Authoritative in-memory list plus its persisted mirror
#[derive(Debug)]
pub struct ItemListStore<R, C = SystemClock> {
    repo: R,
    clock: C,
    ids: IdGenerator,
    items: Vec<Item>,
}

impl<R: ListRepository> ItemListStore<R> {
    /// Load the persisted list using the wall clock
    pub fn load(repo: R) -> Self {
        Self::load_with_clock(repo, SystemClock)
    }
}

impl<R: ListRepository, C: Clock> ItemListStore<R, C> {
    /// Load the persisted list.
    ///
    /// Never fails: unreadable or malformed content is logged and the store
    /// starts empty.
    pub fn load_with_clock(repo: R, clock: C) -> Self {
        let items = match repo.load() {
            Ok(items) => {
                log::info!("[Store] Loaded {} items", items.len());
                items
            }
            Err(e) => {
                log::error!("[Store] Error loading items, starting empty: {}", e);
                Vec::new()
            }
        };
        Self {
            ids: IdGenerator::seeded(&items),
            repo,
            clock,
            items,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn count_label(&self) -> String {
        count_label(self.count())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prepend a new item with the trimmed `text`.
    ///
    /// Blank text is ignored: nothing is created and nothing is written.
    pub fn add_item(&mut self, text: &str) -> Option<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let now = self.clock.now();
        let mut id = self.ids.next(now);
        // Restored lists may hold arbitrary ids
        while self.get(&id).is_some() {
            id = self.ids.next(now);
        }
        self.items.insert(0, Item::new(id.clone(), text.to_string(), now));
        self.persist();
        Some(id)
    }

    /// Flip `completed` on the item with `id`, keeping its position.
    ///
    /// Returns false, and writes nothing, when no item has that id.
    pub fn toggle_complete(&mut self, id: &ItemId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        item.toggle();
        self.persist();
        true
    }

    /// Remove the item with `id`.
    ///
    /// Returns false, and writes nothing, when no item has that id.
    pub fn delete_item(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Write the full list; a failed write keeps the in-memory state
    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.items) {
            log::warn!("[Store] Failed to save {} items: {}", self.items.len(), e);
        }
    }
}
