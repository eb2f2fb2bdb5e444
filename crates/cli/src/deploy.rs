//! The deployment sequence: a registry, then a wallet bound to it.

use fvs_config::{ConfigError, Settings};
use fvs_primitives::Address;
use fvs_smart_contract::{ContractSystem, FeeValueStorageRef, WalletRef};
use thiserror::Error;
use tracing::info;

/// Deployment failures.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to deploy FeeValueStorage")]
    Registry(#[source] fvs_smart_contract::Error),

    #[error("failed to deploy Wallet")]
    Wallet(#[source] fvs_smart_contract::Error),
}

/// Outcome of a successful deployment.
#[derive(Debug)]
pub struct Deployment {
    /// Host the contracts live in.
    pub system: ContractSystem,
    pub registry: FeeValueStorageRef,
    pub wallet: WalletRef,
    pub owner: Address,
    pub user: Address,
    pub network: String,
    pub chain_id: u64,
}

/// Deploys `FeeValueStorage(fee_rate)` and then `Wallet(user, owner, registry)`,
/// both from the owner account.
///
/// Only in-process networks are supported; a network configured with a
/// remote `url` is refused before anything is deployed.
pub fn run(settings: &Settings) -> Result<Deployment, DeployError> {
    let (name, network) = settings.selected_network()?;
    if let Some(url) = &network.url {
        return Err(ConfigError::Invalid(format!(
            "network '{name}' is remote ({url}); only in-process networks can be deployed to"
        ))
        .into());
    }

    let owner = settings.accounts.owner();
    let user = settings.accounts.user();
    let fee_rate = settings.deployment.fee_rate;

    info!(
        target: "fvs",
        network = name,
        chain_id = network.chain_id,
        owner = %owner,
        user = %user,
        fee_rate,
        "starting deployment"
    );

    let mut system = ContractSystem::new();
    let registry =
        FeeValueStorageRef::deploy(&mut system, owner, fee_rate).map_err(DeployError::Registry)?;
    let wallet = WalletRef::deploy(&mut system, owner, user, owner, registry.address())
        .map_err(DeployError::Wallet)?;

    info!(
        target: "fvs",
        registry = %registry.address(),
        wallet = %wallet.address(),
        "deployment complete"
    );

    Ok(Deployment {
        system,
        registry,
        wallet,
        owner,
        user,
        network: name.to_string(),
        chain_id: network.chain_id,
    })
}
