//! # FVS Smart Contract
//!
//! Contract host and the two contracts it runs:
//!
//! - [`FeeValueStorage`]: an owner-controlled registry of one fee rate in
//!   basis points, bounded to `[0, 10000]`
//! - [`Wallet`]: binds a user, an owner and a registry, and reads the
//!   registry's current rate on demand
//!
//! Calls run through a [`ContractSystem`]. Each call executes in its own
//! [`ApplicationEngine`] against a write overlay that is committed only when
//! the call succeeds, so a failed call never changes state.
//!
//! ## Example
//!
//! ```rust
//! use fvs_primitives::Address;
//! use fvs_smart_contract::{ContractSystem, FeeValueStorageRef, WalletRef};
//!
//! let owner = Address::dev_account(0);
//! let user = Address::dev_account(1);
//! let mut system = ContractSystem::new();
//!
//! let registry = FeeValueStorageRef::deploy(&mut system, owner, 1337u32).unwrap();
//! let wallet = WalletRef::deploy(&mut system, owner, user, owner, registry.address()).unwrap();
//!
//! registry.set_new_fee_rate(&mut system, owner, 250u32).unwrap();
//! assert_eq!(wallet.fee_rate(&system).unwrap(), 250);
//!
//! let err = registry.set_new_fee_rate(&mut system, user, 0u32).unwrap_err();
//! assert_eq!(err.to_string(), "Ownable: caller is not the owner");
//! ```

pub mod application_engine;
pub mod bindings;
pub mod call_flags;
pub mod contract_system;
pub mod contract_value;
pub mod error;
pub mod native;
pub mod storage;

pub use application_engine::{ApplicationEngine, CallFrame, ContractTable, MAX_CALL_DEPTH};
pub use bindings::{FeeValueStorageRef, WalletRef};
pub use call_flags::CallFlags;
pub use contract_system::ContractSystem;
pub use contract_value::ContractValue;
pub use error::{Error, ErrorKind, Result};
pub use native::{ContractMethod, FeeValueStorage, NativeContract, Wallet};
pub use storage::{MemoryStore, StorageItem, StorageKey};
