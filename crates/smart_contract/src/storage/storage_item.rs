//! Storage item implementation for contract storage.

use crate::{Error, Result};
use fvs_primitives::Address;
use serde::{Deserialize, Serialize};

/// Represents a value in contract storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageItem {
    /// The value data.
    pub value: Vec<u8>,
}

impl StorageItem {
    /// Creates a new storage item.
    pub fn new(value: Vec<u8>) -> Self {
        Self { value }
    }

    /// Creates a storage item holding a little-endian `u64`.
    pub fn from_u64(value: u64) -> Self {
        Self::new(value.to_le_bytes().to_vec())
    }

    /// Creates a storage item holding an address.
    pub fn from_address(address: &Address) -> Self {
        Self::new(address.to_vec())
    }

    /// Decodes the value as a little-endian `u64`.
    pub fn as_u64(&self) -> Result<u64> {
        let bytes: [u8; 8] = self.value.as_slice().try_into().map_err(|_| {
            Error::Storage(format!(
                "expected 8-byte integer, found {} bytes",
                self.value.len()
            ))
        })?;
        Ok(u64::from_le_bytes(bytes))
    }

    /// Decodes the value as an address.
    pub fn as_address(&self) -> Result<Address> {
        Address::from_bytes(&self.value)
            .map_err(|e| Error::Storage(format!("invalid stored address: {e}")))
    }

    /// Gets the length of the value.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Checks if the storage item is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
