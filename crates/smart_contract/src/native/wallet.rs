//! Wallet contract.
//!
//! Binds a user, an owner and a fee registry together. The registry is only
//! ever read, through a nested call holding read-only rights, so the rate a
//! wallet sees is always the one current at the moment of the call.

use super::native_contract::expect_arguments;
use super::FeeValueStorage;
use crate::application_engine::ApplicationEngine;
use crate::call_flags::CallFlags;
use crate::contract_value::ContractValue;
use crate::native::{ContractMethod, NativeContract};
use crate::storage::StorageItem;
use crate::{Error, Result};
use fvs_primitives::Address;
use tracing::debug;

/// The Wallet contract.
///
/// Only the constructor and read accessors exist; value movement between the
/// two principals is not part of this contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wallet;

const METHODS: &[ContractMethod] = &[
    ContractMethod::safe(Wallet::USER, 0),
    ContractMethod::safe(Wallet::OWNER, 0),
    ContractMethod::safe(Wallet::FEE_SOURCE, 0),
    // Reads through to the registry, hence the extra right to call out.
    ContractMethod::new(Wallet::FEE_RATE, 0, true, CallFlags::READ_ONLY),
];

impl Wallet {
    /// Contract name.
    pub const NAME: &'static str = "Wallet";

    /// `user() -> address`
    pub const USER: &'static str = "user";
    /// `owner() -> address`
    pub const OWNER: &'static str = "owner";
    /// `feeSource() -> address`
    pub const FEE_SOURCE: &'static str = "feeSource";
    /// `feeRate() -> uint`, read from the fee source at call time.
    pub const FEE_RATE: &'static str = "feeRate";

    // Storage keys
    pub const USER_KEY: &'static [u8] = b"User";
    pub const OWNER_KEY: &'static [u8] = b"Owner";
    pub const FEE_SOURCE_KEY: &'static [u8] = b"FeeSource";

    /// Creates the contract.
    pub fn new() -> Self {
        Self
    }

    /// The user principal.
    pub fn user(&self, engine: &ApplicationEngine<'_>) -> Result<Address> {
        engine.required_storage(Self::USER_KEY)?.as_address()
    }

    /// The owner principal.
    pub fn owner(&self, engine: &ApplicationEngine<'_>) -> Result<Address> {
        engine.required_storage(Self::OWNER_KEY)?.as_address()
    }

    /// Address of the fee registry.
    pub fn fee_source(&self, engine: &ApplicationEngine<'_>) -> Result<Address> {
        engine.required_storage(Self::FEE_SOURCE_KEY)?.as_address()
    }

    /// The registry's fee rate right now.
    pub fn current_fee_rate(&self, engine: &mut ApplicationEngine<'_>) -> Result<u64> {
        let source = self.fee_source(engine)?;
        let rate = engine
            .call_contract(source, FeeValueStorage::FEE_RATE, &[], CallFlags::READ_ONLY)?
            .to_u64()?;

        debug!(target: "fvs", wallet = %engine.executing(), source = %source, rate, "fee rate read");
        Ok(rate)
    }

    /// A fee source must be a deployed contract exposing a read-only `feeRate`.
    fn check_fee_source(engine: &ApplicationEngine<'_>, source: &Address) -> Result<()> {
        let contract = engine.contract(source).ok_or_else(|| {
            Error::InvalidArgument(format!("fee source {source} is not a deployed contract"))
        })?;

        let exposes_rate = matches!(
            contract.find_method(FeeValueStorage::FEE_RATE),
            Some(method) if method.safe && method.parameters == 0
        );
        if !exposes_rate {
            return Err(Error::InvalidArgument(format!(
                "fee source {source} ({}) does not expose {}()",
                contract.name(),
                FeeValueStorage::FEE_RATE
            )));
        }
        Ok(())
    }
}

impl NativeContract for Wallet {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn methods(&self) -> &[ContractMethod] {
        METHODS
    }

    /// `constructor(address user, address owner, address feeSource)`
    fn initialize(&self, engine: &mut ApplicationEngine<'_>, args: &[ContractValue]) -> Result<()> {
        expect_arguments(Self::NAME, args, 3)?;
        let user = args[0].as_address()?;
        let owner = args[1].as_address()?;
        let fee_source = args[2].as_address()?;

        Self::check_fee_source(engine, &fee_source)?;

        engine.put_storage(Self::USER_KEY, StorageItem::from_address(&user))?;
        engine.put_storage(Self::OWNER_KEY, StorageItem::from_address(&owner))?;
        engine.put_storage(Self::FEE_SOURCE_KEY, StorageItem::from_address(&fee_source))?;
        Ok(())
    }

    fn invoke(
        &self,
        engine: &mut ApplicationEngine<'_>,
        method: &str,
        _args: &[ContractValue],
    ) -> Result<ContractValue> {
        match method {
            Self::USER => self.user(engine).map(ContractValue::from),
            Self::OWNER => self.owner(engine).map(ContractValue::from),
            Self::FEE_SOURCE => self.fee_source(engine).map(ContractValue::from),
            Self::FEE_RATE => self.current_fee_rate(engine).map(ContractValue::from),
            _ => Err(Error::MethodNotFound {
                contract: Self::NAME.to_string(),
                method: method.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_creation() {
        let wallet = Wallet::new();
        assert_eq!(wallet.name(), "Wallet");
        assert_eq!(wallet.methods().len(), 4);
        assert!(wallet.methods().iter().all(|m| m.safe));
        assert_eq!(
            wallet.find_method("feeRate").unwrap().required_call_flags,
            CallFlags::READ_ONLY
        );
        assert!(wallet.find_method("withdraw").is_none());
    }
}
