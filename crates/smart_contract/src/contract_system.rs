//! The contract system: deployed contracts, committed state and the entry
//! points that run calls against them.

use crate::application_engine::{ApplicationEngine, CallFrame, ContractTable};
use crate::call_flags::CallFlags;
use crate::contract_value::ContractValue;
use crate::native::NativeContract;
use crate::storage::MemoryStore;
use crate::{Error, Result};
use fvs_primitives::Address;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Hosts deployed contracts and their committed storage.
///
/// Mutating entry points take `&mut self`, so calls are serialized. Each call
/// runs in its own [`ApplicationEngine`] and its writes are applied only if
/// it succeeds.
#[derive(Default)]
pub struct ContractSystem {
    contracts: ContractTable,
    store: MemoryStore,
    nonces: HashMap<Address, u64>,
}

impl ContractSystem {
    /// Creates an empty system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys `contract` on behalf of `deployer`, running its constructor
    /// with `args`. Returns the new contract's address.
    ///
    /// A failed constructor deploys nothing and does not consume the
    /// deployer's nonce.
    pub fn deploy(
        &mut self,
        deployer: Address,
        contract: Arc<dyn NativeContract>,
        args: &[ContractValue],
    ) -> Result<Address> {
        let nonce = self.nonce(&deployer);
        let address = Address::create(&deployer, nonce);
        if self.contracts.contains_key(&address) {
            return Err(Error::ContractAlreadyExists(address));
        }

        let frame = CallFrame {
            caller: deployer,
            executing: address,
            flags: CallFlags::ALL,
        };
        let mut engine = ApplicationEngine::new(&self.contracts, &self.store, frame);
        if let Err(err) = contract.initialize(&mut engine, args) {
            warn!(
                target: "fvs",
                contract = contract.name(),
                deployer = %deployer,
                error = %err,
                "deployment failed"
            );
            return Err(err);
        }
        let changes = engine.into_changes();

        self.store.apply(changes);
        self.nonces.insert(deployer, nonce + 1);
        info!(
            target: "fvs",
            contract = contract.name(),
            address = %address,
            deployer = %deployer,
            "contract deployed"
        );
        self.contracts.insert(address, contract);
        Ok(address)
    }

    /// Invokes `method` on the contract at `target` as `caller`, committing
    /// its writes on success.
    pub fn invoke(
        &mut self,
        caller: Address,
        target: Address,
        method: &str,
        args: &[ContractValue],
    ) -> Result<ContractValue> {
        let (result, changes) = {
            let contract = self
                .contracts
                .get(&target)
                .cloned()
                .ok_or(Error::ContractNotFound(target))?;
            let frame = CallFrame {
                caller,
                executing: target,
                flags: CallFlags::ALL,
            };
            let mut engine = ApplicationEngine::new(&self.contracts, &self.store, frame);
            let result = engine.dispatch(contract.as_ref(), method, args);
            (result, engine.into_changes())
        };

        match result {
            Ok(value) => {
                self.store.apply(changes);
                Ok(value)
            }
            Err(err) => {
                warn!(
                    target: "fvs",
                    contract = %target,
                    caller = %caller,
                    method,
                    error = %err,
                    "call faulted, state rolled back"
                );
                Err(err)
            }
        }
    }

    /// Runs `method` with read-only rights. Nothing is ever committed.
    pub fn call(
        &self,
        caller: Address,
        target: Address,
        method: &str,
        args: &[ContractValue],
    ) -> Result<ContractValue> {
        let contract = self
            .contracts
            .get(&target)
            .cloned()
            .ok_or(Error::ContractNotFound(target))?;
        let frame = CallFrame {
            caller,
            executing: target,
            flags: CallFlags::READ_ONLY,
        };
        let mut engine = ApplicationEngine::new(&self.contracts, &self.store, frame);
        engine.dispatch(contract.as_ref(), method, args)
    }

    /// Checks if a contract is deployed at `address`.
    pub fn is_deployed(&self, address: &Address) -> bool {
        self.contracts.contains_key(address)
    }

    /// Name of the contract deployed at `address`.
    pub fn contract_name(&self, address: &Address) -> Option<&str> {
        self.contracts.get(address).map(|c| c.name())
    }

    /// Number of successful deployments made by `deployer`.
    pub fn nonce(&self, deployer: &Address) -> u64 {
        self.nonces.get(deployer).copied().unwrap_or(0)
    }

    /// Committed storage.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}

impl std::fmt::Debug for ContractSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractSystem")
            .field("contracts", &self.contracts.len())
            .field("entries", &self.store.len())
            .finish()
    }
}
