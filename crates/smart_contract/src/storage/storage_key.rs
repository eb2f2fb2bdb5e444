//! Storage key implementation for contract storage.

use fvs_primitives::{Address, ADDRESS_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a key in contract storage. Every key belongs to exactly one
/// contract, so contracts cannot observe each other's entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct StorageKey {
    /// The contract that owns this storage key.
    pub contract: Address,

    /// The key data.
    pub key: Vec<u8>,
}

impl StorageKey {
    /// Creates a new storage key.
    pub fn new(contract: Address, key: Vec<u8>) -> Self {
        Self { contract, key }
    }

    /// Creates a storage key from a contract and a byte-string key.
    pub fn from_slice(contract: Address, key: &[u8]) -> Self {
        Self::new(contract, key.to_vec())
    }

    /// Gets the size of the storage key in bytes.
    pub fn size(&self) -> usize {
        ADDRESS_SIZE + self.key.len()
    }

    /// Checks if this key has a specific prefix.
    pub fn has_prefix(&self, prefix: &[u8]) -> bool {
        self.key.starts_with(prefix)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.key) {
            Ok(text) => write!(f, "{}:{}", self.contract, text),
            Err(_) => write!(f, "{}:0x{}", self.contract, hex::encode(&self.key)),
        }
    }
}
