//! FeeValueStorage contract.
//!
//! Holds a single fee rate in basis points and the identity of the account
//! that deployed it. Only that owner may change the rate, and the rate never
//! leaves `[0, MAX_FEE_RATE_BPS]`.

use super::native_contract::expect_arguments;
use crate::application_engine::ApplicationEngine;
use crate::contract_value::ContractValue;
use crate::native::{ContractMethod, NativeContract};
use crate::storage::StorageItem;
use crate::{Error, Result};
use fvs_primitives::{Address, MAX_FEE_RATE_BPS};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use tracing::info;

/// The FeeValueStorage contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeeValueStorage;

const METHODS: &[ContractMethod] = &[
    ContractMethod::safe(FeeValueStorage::FEE_RATE, 0),
    ContractMethod::safe(FeeValueStorage::OWNER, 0),
    ContractMethod::unsafe_method(FeeValueStorage::SET_NEW_FEE_RATE, 1),
];

impl FeeValueStorage {
    /// Contract name, also the prefix of its validation error.
    pub const NAME: &'static str = "FeeValueStorage";

    /// `feeRate() -> uint`
    pub const FEE_RATE: &'static str = "feeRate";
    /// `owner() -> address`
    pub const OWNER: &'static str = "owner";
    /// `setNewFeeRate(uint)`
    pub const SET_NEW_FEE_RATE: &'static str = "setNewFeeRate";

    // Storage keys
    pub const FEE_RATE_KEY: &'static [u8] = b"FeeRate";
    pub const OWNER_KEY: &'static [u8] = b"Owner";

    /// Creates the contract.
    pub fn new() -> Self {
        Self
    }

    /// Current fee rate in basis points.
    pub fn fee_rate(&self, engine: &ApplicationEngine<'_>) -> Result<u64> {
        engine.required_storage(Self::FEE_RATE_KEY)?.as_u64()
    }

    /// Account that deployed the registry.
    pub fn owner(&self, engine: &ApplicationEngine<'_>) -> Result<Address> {
        engine.required_storage(Self::OWNER_KEY)?.as_address()
    }

    /// Replaces the fee rate. `caller` must be the owner; the owner check
    /// runs before the range check.
    pub fn set_new_fee_rate(
        &self,
        engine: &mut ApplicationEngine<'_>,
        caller: &Address,
        new_rate: &BigUint,
    ) -> Result<()> {
        if *caller != self.owner(engine)? {
            return Err(Error::Unauthorized);
        }

        let new_rate = Self::validate(new_rate)?;
        let old_rate = self.fee_rate(engine)?;
        engine.put_storage(Self::FEE_RATE_KEY, StorageItem::from_u64(new_rate))?;

        info!(
            target: "fvs",
            contract = %engine.executing(),
            old_rate,
            new_rate,
            "fee rate updated"
        );
        Ok(())
    }

    /// Accepts `value` if it is a valid fee rate.
    pub fn validate(value: &BigUint) -> Result<u64> {
        value
            .to_u64()
            .filter(|rate| *rate <= MAX_FEE_RATE_BPS)
            .ok_or(Error::InvalidValue {
                contract: Self::NAME,
            })
    }
}

impl NativeContract for FeeValueStorage {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn methods(&self) -> &[ContractMethod] {
        METHODS
    }

    /// `constructor(uint feeRate)`: the deployer becomes the owner.
    fn initialize(&self, engine: &mut ApplicationEngine<'_>, args: &[ContractValue]) -> Result<()> {
        expect_arguments(Self::NAME, args, 1)?;
        let fee_rate = Self::validate(&args[0].as_unsigned()?)?;
        let owner = engine.caller();

        engine.put_storage(Self::OWNER_KEY, StorageItem::from_address(&owner))?;
        engine.put_storage(Self::FEE_RATE_KEY, StorageItem::from_u64(fee_rate))?;
        Ok(())
    }

    fn invoke(
        &self,
        engine: &mut ApplicationEngine<'_>,
        method: &str,
        args: &[ContractValue],
    ) -> Result<ContractValue> {
        match method {
            Self::FEE_RATE => self.fee_rate(engine).map(ContractValue::from),
            Self::OWNER => self.owner(engine).map(ContractValue::from),
            Self::SET_NEW_FEE_RATE => {
                let new_rate = args[0].as_unsigned()?;
                let caller = engine.caller();
                self.set_new_fee_rate(engine, &caller, &new_rate)?;
                Ok(ContractValue::Void)
            }
            _ => Err(Error::MethodNotFound {
                contract: Self::NAME.to_string(),
                method: method.to_string(),
            }),
        }
    }
}
