//! My List Core
//!
//! Layered architecture:
//! - domain: Core entities and presentation data
//! - repository: Storage capability and list persistence
//! - store: The in-memory item list and its mutation operations

pub mod config;
pub mod domain;
pub mod repository;
pub mod store;

pub use config::{ListConfig, DEFAULT_STORAGE_KEY};
pub use domain::{
    demo_collections, ActionOutcome, CollectionSummary, ColorTag, DomainError, DomainResult,
    Entity, Item, ItemId, MenuEntry, PanelAction, PanelActionHandler, UnwiredActions,
    MENU_ENTRIES,
};
pub use repository::{KeyValueListRepository, KeyValueStorage, ListRepository, MemoryStorage};
pub use store::{count_label, Clock, IdGenerator, ItemListStore, SystemClock};
