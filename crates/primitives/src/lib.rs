//! # FVS Primitives
//!
//! Fundamental types shared by the fee registry contracts and their host.
//!
//! - [`Address`]: 160-bit principal / contract identity
//! - Basis-point constants bounding every fee rate
//!
//! ## Example
//!
//! ```rust
//! use fvs_primitives::{Address, MAX_FEE_RATE_BPS};
//!
//! let deployer = Address::hash160(b"deployer");
//! let registry = Address::create(&deployer, 0);
//! assert_ne!(deployer, registry);
//! assert_eq!(MAX_FEE_RATE_BPS, 10_000);
//! ```

pub mod address;
pub mod constants;
pub mod error;

// Re-exports
pub use address::Address;
pub use constants::*;
pub use error::{PrimitiveError, PrimitiveResult};
