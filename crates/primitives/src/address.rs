//! Implementation of `Address`, the 160-bit identity of accounts and contracts.

use crate::constants::{ADDRESS_SIZE, DEV_ACCOUNT_SEED};
use crate::error::{PrimitiveError, PrimitiveResult};
use ripemd::Ripemd160;
use serde::de::{self, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A 20-byte identity shared by external accounts (principals) and deployed
/// contracts.
///
/// Textual form is `0x` followed by 40 lowercase hex digits, bytes in order.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Alias for the address width in bytes.
    pub const LENGTH: usize = ADDRESS_SIZE;

    /// Returns the all-zero address.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; ADDRESS_SIZE])
    }

    /// Checks if this address is all zeroes.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Creates an address from exactly 20 bytes.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidLength` if `value` is not 20 bytes long.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; ADDRESS_SIZE] =
            value
                .try_into()
                .map_err(|_| PrimitiveError::InvalidLength {
                    expected: ADDRESS_SIZE,
                    actual: value.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Returns the raw bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Returns the bytes as a `Vec<u8>`.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// RIPEMD-160 of SHA-256 of `data`.
    #[must_use]
    pub fn hash160(data: &[u8]) -> Self {
        let sha = Sha256::digest(data);
        let digest = Ripemd160::digest(sha);

        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Derives the address of the `nonce`-th contract deployed by `deployer`.
    #[must_use]
    pub fn create(deployer: &Address, nonce: u64) -> Self {
        let mut preimage = Vec::with_capacity(ADDRESS_SIZE + 8);
        preimage.extend_from_slice(&deployer.0);
        preimage.extend_from_slice(&nonce.to_le_bytes());
        Self::hash160(&preimage)
    }

    /// Deterministic development account number `index`.
    #[must_use]
    pub fn dev_account(index: u32) -> Self {
        Self::hash160(format!("{DEV_ACCOUNT_SEED}:{index}").as_bytes())
    }

    /// Parses an address from 40 hex digits, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidFormat` if the input is not 40 hex digits.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != ADDRESS_SIZE * 2 {
            return Err(PrimitiveError::InvalidFormat {
                message: format!("expected {} hex digits, got {}", ADDRESS_SIZE * 2, digits.len()),
            });
        }

        let bytes = hex::decode(digits).map_err(|e| PrimitiveError::InvalidFormat {
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Converts the address to its `0x`-prefixed hex form.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_string())
    }
}

impl From<[u8; ADDRESS_SIZE]> for Address {
    fn from(data: [u8; ADDRESS_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AddressVisitor;

        impl Visitor<'_> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 0x-prefixed 20-byte hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Address, E> {
                Address::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}
