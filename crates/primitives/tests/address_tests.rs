//! Address parsing, derivation and serialization tests.

use fvs_primitives::{Address, PrimitiveError, ADDRESS_SIZE};
use proptest::prelude::*;

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_address_serializes_as_hex_string() {
    let address = Address::from([0xab; ADDRESS_SIZE]);
    let json = serde_json::to_string(&address).unwrap();
    assert_eq!(json, "\"0xabababababababababababababababababababab\"");

    let back: Address = serde_json::from_str(&json).unwrap();
    assert_eq!(back, address);
}

#[test]
fn test_address_deserialize_rejects_garbage() {
    let result: Result<Address, _> = serde_json::from_str("\"0x1234\"");
    assert!(result.is_err());

    let result: Result<Address, _> = serde_json::from_str("42");
    assert!(result.is_err());
}

#[test]
fn test_hash160_known_vector() {
    // RIPEMD160(SHA256("")) = b472a266d0bd89c13706a4132ccfb16f7c3b9fcb
    let address = Address::hash160(b"");
    assert_eq!(
        address.to_string(),
        "0xb472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
    );
}

#[test]
fn test_from_str_error_is_invalid_format() {
    let err = "not-an-address".parse::<Address>().unwrap_err();
    assert!(matches!(err, PrimitiveError::InvalidFormat { .. }));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: the textual form parses back to the same address
    #[test]
    fn prop_display_parses_back(bytes in prop::array::uniform20(any::<u8>())) {
        let address = Address::from(bytes);
        prop_assert_eq!(address.to_string().parse::<Address>().unwrap(), address);
    }

    /// Property: contract addresses never collide with their deployer
    #[test]
    fn prop_create_differs_from_deployer(
        bytes in prop::array::uniform20(any::<u8>()),
        nonce in any::<u64>()
    ) {
        let deployer = Address::from(bytes);
        prop_assert_ne!(Address::create(&deployer, nonce), deployer);
    }
}
