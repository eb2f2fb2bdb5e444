//! # fvs-rs: Fee Value Storage
//!
//! An owner-controlled registry holding one fee rate in basis points, and a
//! wallet contract that reads the current rate from it.
//!
//! ## Quick Start
//!
//! ```rust
//! use fvs_rs::prelude::*;
//!
//! let owner = Address::dev_account(0);
//! let user = Address::dev_account(1);
//! let mut system = ContractSystem::new();
//!
//! let registry = FeeValueStorageRef::deploy(&mut system, owner, 1337u64).unwrap();
//! let wallet = WalletRef::deploy(&mut system, owner, user, owner, registry.address()).unwrap();
//! assert_eq!(wallet.fee_rate(&system).unwrap(), 1337);
//!
//! let err = registry.set_new_fee_rate(&mut system, owner, 10_001u64).unwrap_err();
//! assert_eq!(err.to_string(), "FeeValueStorage: Invalid value");
//! ```
//!
//! ## Architecture
//!
//! - [`fvs_primitives`] - Addresses and shared constants
//! - [`fvs_smart_contract`] - Contract host and the FeeValueStorage and Wallet contracts
//! - [`fvs_config`] - Deployment, account, logging and network settings

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use fvs_config as config;
pub use fvs_primitives as primitives;
pub use fvs_smart_contract as smart_contract;

/// Common imports
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::primitives::{Address, MAX_FEE_RATE_BPS};
    pub use crate::smart_contract::{
        ContractSystem, Error, ErrorKind, FeeValueStorageRef, WalletRef,
    };
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
