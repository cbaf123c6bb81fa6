//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser storage, in-memory maps, etc.

use crate::domain::{DomainResult, Item};

/// Opaque string key-value storage
///
/// The only capability the list needs from its host.
pub trait KeyValueStorage {
    /// Read the value under `key`, `None` when nothing is stored
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// Whole-list persistence
pub trait ListRepository {
    /// Read the persisted list, empty when nothing was ever saved
    fn load(&self) -> DomainResult<Vec<Item>>;

    /// Overwrite the persisted list
    fn save(&self, items: &[Item]) -> DomainResult<()>;
}
