//! Repository Layer
//!
//! Storage capability abstraction and the item list repository built on it.

mod traits;
mod memory;
mod list_repo;


pub use traits::{KeyValueStorage, ListRepository};
pub use memory::MemoryStorage;
pub use list_repo::KeyValueListRepository;
