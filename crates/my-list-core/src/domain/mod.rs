//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO platform dependencies.

mod entity;
mod item;
mod collection;
mod panel;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{Item, ItemId};
pub use collection::{CollectionSummary, ColorTag, demo_collections};
pub use panel::{MenuEntry, PanelAction, PanelActionHandler, ActionOutcome, UnwiredActions, MENU_ENTRIES};
