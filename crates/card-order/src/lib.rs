//! Card Order
//!
//! Ordered card sets that can be rearranged by dragging and remember
//! their order through an injected key-value store.
//!
//! Layers:
//! - item / reconcile: card data and merging a saved order with the canonical one
//! - storage: the persistence contract plus a JSON codec and in-memory store
//! - card_set: the drag-and-drop state machine

mod item;
mod reconcile;
mod storage;
mod config;
mod card_set;

#[cfg(test)]
mod tests;

pub use item::{CardItem, ids_of};
pub use reconcile::reconcile;
pub use storage::{
    KeyValueStore, PersistenceAdapter, JsonOrderStore, MemoryStore, NoStorage, StorageError,
};
pub use config::{CardSetConfig, ConfigError, OrderListener, Persistence};
pub use card_set::{DragPhase, OrderedCardSet};
