//! Storage operations for ApplicationEngine.
//!
//! Every operation is scoped to the executing contract and checked against
//! the rights of the current frame.

use super::ApplicationEngine;
use crate::call_flags::CallFlags;
use crate::storage::{StorageItem, StorageKey};
use crate::{Error, Result};

impl ApplicationEngine<'_> {
    /// Gets an item from the executing contract's storage.
    pub fn get_storage(&self, key: &[u8]) -> Result<Option<&StorageItem>> {
        self.require_flags(CallFlags::READ_STATES, "get_storage")?;
        let key = StorageKey::from_slice(self.executing(), key);
        Ok(self.snapshot.get(&key))
    }

    /// Gets an item that the contract's constructor is known to have written.
    pub fn required_storage(&self, key: &[u8]) -> Result<&StorageItem> {
        let executing = self.executing();
        self.get_storage(key)?.ok_or_else(|| {
            Error::Storage(format!(
                "missing entry {}",
                StorageKey::from_slice(executing, key)
            ))
        })
    }

    /// Puts an item into the executing contract's storage.
    pub fn put_storage(&mut self, key: &[u8], item: StorageItem) -> Result<()> {
        self.require_flags(CallFlags::WRITE_STATES, "put_storage")?;
        let key = StorageKey::from_slice(self.executing(), key);
        self.snapshot.put(key, item);
        Ok(())
    }
}
