//! Deployment sequence tests.

use fvs_cli::{run, DeployError};
use fvs_config::{NetworkConfig, Settings};
use fvs_primitives::Address;
use std::error::Error as _;

#[test]
fn test_default_deployment() {
    let deployment = run(&Settings::default()).unwrap();
    let system = &deployment.system;

    assert_eq!(deployment.network, "hardhat");
    assert_eq!(deployment.chain_id, 31337);
    assert_eq!(deployment.owner, Address::dev_account(0));
    assert_eq!(deployment.user, Address::dev_account(1));

    assert_eq!(deployment.registry.fee_rate(system).unwrap(), 1337);
    assert_eq!(deployment.registry.owner(system).unwrap(), deployment.owner);

    assert_eq!(deployment.wallet.user(system).unwrap(), deployment.user);
    assert_eq!(deployment.wallet.owner(system).unwrap(), deployment.owner);
    assert_eq!(
        deployment.wallet.fee_source(system).unwrap(),
        deployment.registry.address()
    );
    assert_eq!(deployment.wallet.fee_rate(system).unwrap(), 1337);
}

#[test]
fn test_deployment_is_deterministic() {
    let first = run(&Settings::default()).unwrap();
    let second = run(&Settings::default()).unwrap();

    assert_eq!(first.registry.address(), second.registry.address());
    assert_eq!(first.wallet.address(), second.wallet.address());
    assert_eq!(
        first.registry.address(),
        Address::create(&Address::dev_account(0), 0)
    );
}

#[test]
fn test_out_of_range_fee_rate_fails_registry_step() {
    let mut settings = Settings::default();
    settings.deployment.fee_rate = 10_001;

    let err = run(&settings).unwrap_err();
    assert!(matches!(err, DeployError::Registry(_)));
    assert_eq!(err.to_string(), "failed to deploy FeeValueStorage");
    assert_eq!(
        err.source().map(|s| s.to_string()),
        Some("FeeValueStorage: Invalid value".to_string())
    );
}

#[test]
fn test_remote_network_is_refused() {
    let mut settings = Settings::default();
    settings.networks.insert(
        "goerli".to_string(),
        NetworkConfig {
            chain_id: 5,
            url: Some("https://goerli.example.org".to_string()),
        },
    );
    settings.default_network = "goerli".to_string();

    let err = run(&settings).unwrap_err();
    assert!(matches!(err, DeployError::Config(_)));
    assert!(err.to_string().contains("remote"));
}

#[test]
fn test_local_network_chain_id_is_reported() {
    let mut settings = Settings::default();
    settings.networks.insert(
        "localhost".to_string(),
        NetworkConfig {
            chain_id: 1337,
            url: None,
        },
    );
    settings.default_network = "localhost".to_string();

    let deployment = run(&settings).unwrap();
    assert_eq!(deployment.network, "localhost");
    assert_eq!(deployment.chain_id, 1337);
}
