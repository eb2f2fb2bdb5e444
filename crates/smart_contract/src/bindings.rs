//! Typed handles over deployed contracts.
//!
//! These wrap [`ContractSystem::invoke`] and [`ContractSystem::call`] with the
//! method names and argument encodings of each contract.

use crate::contract_system::ContractSystem;
use crate::contract_value::ContractValue;
use crate::native::{FeeValueStorage, Wallet};
use crate::Result;
use fvs_primitives::Address;
use num_bigint::BigUint;
use std::sync::Arc;

/// Handle to a deployed FeeValueStorage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeValueStorageRef {
    address: Address,
}

impl FeeValueStorageRef {
    /// Deploys a registry as `deployer` with the given initial rate.
    pub fn deploy(
        system: &mut ContractSystem,
        deployer: Address,
        fee_rate: impl Into<BigUint>,
    ) -> Result<Self> {
        let args = [ContractValue::from(fee_rate.into())];
        let address = system.deploy(deployer, Arc::new(FeeValueStorage::new()), &args)?;
        Ok(Self { address })
    }

    /// Wraps an existing deployment.
    pub fn at(address: Address) -> Self {
        Self { address }
    }

    /// Address of the registry.
    pub fn address(&self) -> Address {
        self.address
    }

    /// `feeRate()`
    pub fn fee_rate(&self, system: &ContractSystem) -> Result<u64> {
        system
            .call(Address::zero(), self.address, FeeValueStorage::FEE_RATE, &[])?
            .to_u64()
    }

    /// `owner()`
    pub fn owner(&self, system: &ContractSystem) -> Result<Address> {
        system
            .call(Address::zero(), self.address, FeeValueStorage::OWNER, &[])?
            .as_address()
    }

    /// `setNewFeeRate(newRate)` sent by `caller`.
    pub fn set_new_fee_rate(
        &self,
        system: &mut ContractSystem,
        caller: Address,
        new_rate: impl Into<BigUint>,
    ) -> Result<()> {
        let args = [ContractValue::from(new_rate.into())];
        system.invoke(caller, self.address, FeeValueStorage::SET_NEW_FEE_RATE, &args)?;
        Ok(())
    }
}

/// Handle to a deployed Wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalletRef {
    address: Address,
}

impl WalletRef {
    /// Deploys a wallet as `deployer`.
    pub fn deploy(
        system: &mut ContractSystem,
        deployer: Address,
        user: Address,
        owner: Address,
        fee_source: Address,
    ) -> Result<Self> {
        let args = [
            ContractValue::from(user),
            ContractValue::from(owner),
            ContractValue::from(fee_source),
        ];
        let address = system.deploy(deployer, Arc::new(Wallet::new()), &args)?;
        Ok(Self { address })
    }

    /// Wraps an existing deployment.
    pub fn at(address: Address) -> Self {
        Self { address }
    }

    /// Address of the wallet.
    pub fn address(&self) -> Address {
        self.address
    }

    /// `user()`
    pub fn user(&self, system: &ContractSystem) -> Result<Address> {
        self.read_address(system, Wallet::USER)
    }

    /// `owner()`
    pub fn owner(&self, system: &ContractSystem) -> Result<Address> {
        self.read_address(system, Wallet::OWNER)
    }

    /// `feeSource()`
    pub fn fee_source(&self, system: &ContractSystem) -> Result<Address> {
        self.read_address(system, Wallet::FEE_SOURCE)
    }

    /// `feeRate()`, as read from the fee source now.
    pub fn fee_rate(&self, system: &ContractSystem) -> Result<u64> {
        system
            .call(Address::zero(), self.address, Wallet::FEE_RATE, &[])?
            .to_u64()
    }

    fn read_address(&self, system: &ContractSystem, method: &str) -> Result<Address> {
        system
            .call(Address::zero(), self.address, method, &[])?
            .as_address()
    }
}
