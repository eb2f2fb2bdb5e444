//! Contracts hosted by the contract system.

pub mod fee_value_storage;
pub mod native_contract;
pub mod wallet;

pub use fee_value_storage::FeeValueStorage;
pub use native_contract::{ContractMethod, NativeContract};
pub use wallet::Wallet;
