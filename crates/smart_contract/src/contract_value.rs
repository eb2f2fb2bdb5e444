//! Values passed to and returned from contract methods.

use crate::{Error, Result};
use fvs_primitives::Address;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A method argument or return value.
///
/// Integers are arbitrary precision so that values wider than any machine
/// word reach the contract intact and are rejected by its own range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContractValue {
    /// No value.
    #[default]
    Void,
    /// Boolean value.
    Boolean(bool),
    /// Signed arbitrary-precision integer.
    Integer(BigInt),
    /// Account or contract identity.
    Address(Address),
}

impl ContractValue {
    /// Name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ContractValue::Void => "Void",
            ContractValue::Boolean(_) => "Boolean",
            ContractValue::Integer(_) => "Integer",
            ContractValue::Address(_) => "Address",
        }
    }

    /// Returns the integer, or an error for any other variant.
    pub fn as_integer(&self) -> Result<&BigInt> {
        match self {
            ContractValue::Integer(value) => Ok(value),
            other => Err(Self::mismatch("Integer", other)),
        }
    }

    /// Returns the value as an unsigned integer. Negative integers are
    /// rejected as a type mismatch, as they cannot encode a `uint`.
    pub fn as_unsigned(&self) -> Result<BigUint> {
        let value = self.as_integer()?;
        if value.sign() == Sign::Minus {
            return Err(Error::InvalidArgument(format!(
                "expected unsigned integer, got {value}"
            )));
        }
        Ok(value.magnitude().clone())
    }

    /// Returns the value as `u64` if it fits.
    pub fn to_u64(&self) -> Result<u64> {
        let value = self.as_integer()?;
        value
            .to_u64()
            .ok_or_else(|| Error::InvalidArgument(format!("integer {value} does not fit in u64")))
    }

    /// Returns the address, or an error for any other variant.
    pub fn as_address(&self) -> Result<Address> {
        match self {
            ContractValue::Address(address) => Ok(*address),
            other => Err(Self::mismatch("Address", other)),
        }
    }

    /// Returns the boolean, or an error for any other variant.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            ContractValue::Boolean(value) => Ok(*value),
            other => Err(Self::mismatch("Boolean", other)),
        }
    }

    fn mismatch(expected: &str, actual: &ContractValue) -> Error {
        Error::InvalidArgument(format!(
            "expected {expected}, got {}",
            actual.type_name()
        ))
    }
}

impl fmt::Display for ContractValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractValue::Void => f.write_str("void"),
            ContractValue::Boolean(value) => write!(f, "{value}"),
            ContractValue::Integer(value) => write!(f, "{value}"),
            ContractValue::Address(address) => write!(f, "{address}"),
        }
    }
}

impl From<bool> for ContractValue {
    fn from(value: bool) -> Self {
        ContractValue::Boolean(value)
    }
}

impl From<u64> for ContractValue {
    fn from(value: u64) -> Self {
        ContractValue::Integer(BigInt::from(value))
    }
}

impl From<u32> for ContractValue {
    fn from(value: u32) -> Self {
        ContractValue::Integer(BigInt::from(value))
    }
}

impl From<i64> for ContractValue {
    fn from(value: i64) -> Self {
        ContractValue::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for ContractValue {
    fn from(value: BigInt) -> Self {
        ContractValue::Integer(value)
    }
}

impl From<BigUint> for ContractValue {
    fn from(value: BigUint) -> Self {
        ContractValue::Integer(BigInt::from(value))
    }
}

impl From<Address> for ContractValue {
    fn from(value: Address) -> Self {
        ContractValue::Address(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_accessors() {
        let value = ContractValue::from(1337u64);
        assert_eq!(value.to_u64().unwrap(), 1337);
        assert_eq!(value.as_unsigned().unwrap(), BigUint::from(1337u32));
        assert!(value.as_address().is_err());
    }

    #[test]
    fn test_negative_is_not_unsigned() {
        let value = ContractValue::from(-1i64);
        assert!(matches!(value.as_unsigned(), Err(Error::InvalidArgument(_))));
        assert!(value.to_u64().is_err());
    }

    #[test]
    fn test_wide_integer_survives() {
        let wide = BigUint::from(u64::MAX) * BigUint::from(u64::MAX);
        let value = ContractValue::from(wide.clone());
        assert_eq!(value.as_unsigned().unwrap(), wide);
        assert!(value.to_u64().is_err());
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ContractValue::Void.as_integer().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected Integer, got Void"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ContractValue::from(true).to_string(), "true");
        assert_eq!(ContractValue::from(42u32).to_string(), "42");
        assert_eq!(ContractValue::Void.to_string(), "void");
    }
}
