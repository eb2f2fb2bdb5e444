//! Committed storage and the write overlay a call executes against.

use super::{StorageItem, StorageKey};
use std::collections::BTreeMap;

/// Pending writes of a finished call: `Some` puts, `None` deletes.
pub type ChangeSet = BTreeMap<StorageKey, Option<StorageItem>>;

/// Committed contract state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<StorageKey, StorageItem>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a committed item.
    pub fn get(&self, key: &StorageKey) -> Option<&StorageItem> {
        self.items.get(key)
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Applies every change of a successful call.
    pub fn apply(&mut self, changes: ChangeSet) {
        for (key, change) in changes {
            match change {
                Some(item) => {
                    self.items.insert(key, item);
                }
                None => {
                    self.items.remove(&key);
                }
            }
        }
    }
}

/// Copy-on-write view over a [`MemoryStore`].
///
/// Reads see the overlay first, then the committed store. Writes never touch
/// the store; the owner of the cache decides whether to apply them.
#[derive(Debug)]
pub struct DataCache<'a> {
    store: &'a MemoryStore,
    changes: ChangeSet,
}

impl<'a> DataCache<'a> {
    /// Creates an empty overlay over `store`.
    pub fn new(store: &'a MemoryStore) -> Self {
        Self {
            store,
            changes: ChangeSet::new(),
        }
    }

    /// Gets an item, preferring pending writes.
    pub fn get(&self, key: &StorageKey) -> Option<&StorageItem> {
        match self.changes.get(key) {
            Some(change) => change.as_ref(),
            None => self.store.get(key),
        }
    }

    /// Records a put.
    pub fn put(&mut self, key: StorageKey, item: StorageItem) {
        self.changes.insert(key, Some(item));
    }

    /// Records a delete.
    pub fn delete(&mut self, key: StorageKey) {
        self.changes.insert(key, None);
    }

    /// Checks if any write is pending.
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Consumes the overlay, returning its pending writes.
    pub fn into_changes(self) -> ChangeSet {
        self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fvs_primitives::Address;

    fn key(name: &str) -> StorageKey {
        StorageKey::from_slice(Address::dev_account(0), name.as_bytes())
    }

    #[test]
    fn test_overlay_reads_through_to_store() {
        let mut store = MemoryStore::new();
        let mut seed = ChangeSet::new();
        seed.insert(key("a"), Some(StorageItem::from_u64(1)));
        store.apply(seed);

        let cache = DataCache::new(&store);
        assert_eq!(cache.get(&key("a")), Some(&StorageItem::from_u64(1)));
        assert_eq!(cache.get(&key("b")), None);
        assert!(!cache.has_changes());
    }

    #[test]
    fn test_overlay_shadows_store_until_applied() {
        let mut store = MemoryStore::new();
        let mut seed = ChangeSet::new();
        seed.insert(key("a"), Some(StorageItem::from_u64(1)));
        store.apply(seed);

        let mut cache = DataCache::new(&store);
        cache.put(key("a"), StorageItem::from_u64(2));
        cache.delete(key("gone"));
        assert_eq!(cache.get(&key("a")), Some(&StorageItem::from_u64(2)));
        let changes = cache.into_changes();

        assert_eq!(
            store.get(&key("a")),
            Some(&StorageItem::from_u64(1)),
            "store must be untouched before apply"
        );

        store.apply(changes);
        assert_eq!(store.get(&key("a")), Some(&StorageItem::from_u64(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_hides_committed_entry() {
        let mut store = MemoryStore::new();
        let mut seed = ChangeSet::new();
        seed.insert(key("a"), Some(StorageItem::from_u64(1)));
        store.apply(seed);

        let mut cache = DataCache::new(&store);
        cache.delete(key("a"));
        assert_eq!(cache.get(&key("a")), None);
        let changes = cache.into_changes();

        store.apply(changes);
        assert!(store.is_empty());
    }
}
