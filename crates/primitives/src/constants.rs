//! Protocol-wide constants.

/// Size of an [`Address`](crate::Address) in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Basis points denominator (10000 = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Upper bound (inclusive) of any fee rate held by the registry.
pub const MAX_FEE_RATE_BPS: u64 = BPS_DENOMINATOR;

/// Seed prefix used to derive the deterministic development accounts.
pub const DEV_ACCOUNT_SEED: &str = "fvs-dev-account";
