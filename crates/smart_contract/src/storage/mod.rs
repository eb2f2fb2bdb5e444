//! Contract storage: keys, items, the committed store and per-call overlays.

pub mod data_cache;
pub mod storage_item;
pub mod storage_key;

pub use data_cache::{ChangeSet, DataCache, MemoryStore};
pub use storage_item::StorageItem;
pub use storage_key::StorageKey;
