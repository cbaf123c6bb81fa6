//! Key-Value List Repository
//!
//! Stores the whole item list as one JSON array under a single key.

use std::collections::HashSet;

use crate::config::ListConfig;
use crate::domain::{DomainResult, Entity, Item};
use super::traits::{KeyValueStorage, ListRepository};

/// JSON list repository over any [`KeyValueStorage`]
#[derive(Debug, Clone)]
pub struct KeyValueListRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> KeyValueListRepository<S> {
    pub fn new(storage: S, config: &ListConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
        }
    }
}

/// Drop entries that break item invariants, keeping the rest of the list.
///
/// Blank text is dropped; of several items sharing an id the first is kept.
fn sanitize(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            if item.text.trim().is_empty() {
                log::warn!("[Repo] Dropping item {} with blank text", item.id);
                return false;
            }
            if !seen.insert(item.id().clone()) {
                log::warn!("[Repo] Dropping duplicate of item {}", item.id);
                return false;
            }
            true
        })
        .collect()
}

impl<S: KeyValueStorage> ListRepository for KeyValueListRepository<S> {
    fn load(&self) -> DomainResult<Vec<Item>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let items: Vec<Item> = serde_json::from_str(&raw)?;
        Ok(sanitize(items))
    }

    fn save(&self, items: &[Item]) -> DomainResult<()> {
        let raw = serde_json::to_string(items)?;
        self.storage.set(&self.key, &raw)
    }
}
