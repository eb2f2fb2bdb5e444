//! Settings file loading tests.

use fvs_config::{ConfigError, LogFormat, Settings};
use fvs_primitives::Address;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let owner = Address::dev_account(5);
    let user = Address::dev_account(6);
    let file = write_config(&format!(
        r#"
default_network = "localhost"

[deployment]
fee_rate = 250

[accounts]
owner = "{owner}"
user = "{user}"

[logging]
level = "fvs=debug"
format = "json"

[networks.hardhat]
chain_id = 31337

[networks.localhost]
chain_id = 1337

[networks.goerli]
chain_id = 5
url = "https://goerli.example.org"
"#
    ));

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.deployment.fee_rate, 250);
    assert_eq!(settings.accounts.owner(), owner);
    assert_eq!(settings.accounts.user(), user);
    assert_eq!(settings.logging.level, "fvs=debug");
    assert_eq!(settings.logging.format, LogFormat::Json);
    assert_eq!(settings.networks.len(), 3);

    let (name, network) = settings.selected_network().unwrap();
    assert_eq!(name, "localhost");
    assert_eq!(network.chain_id, 1337);
    assert!(network.is_local());

    let (_, goerli) = settings.network("goerli").unwrap();
    assert!(!goerli.is_local());
    assert!(settings.network("sepolia").is_err());
}

#[test]
fn test_load_partial_config_keeps_defaults() {
    let file = write_config("[deployment]\nfee_rate = 0\n");

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.deployment.fee_rate, 0);
    assert_eq!(settings.logging, Settings::default().logging);
    assert_eq!(settings.accounts.owner(), Address::dev_account(0));
    assert_eq!(settings.selected_network().unwrap().1.chain_id, 31337);
}

#[test]
fn test_address_without_prefix_is_accepted() {
    let owner = Address::dev_account(3);
    let file = write_config(&format!(
        "[accounts]\nowner = \"{}\"\n",
        owner.to_string().trim_start_matches("0x")
    ));

    let settings = Settings::load(file.path()).unwrap();
    assert_eq!(settings.accounts.owner(), owner);
}

#[test]
fn test_malformed_address_is_a_parse_error() {
    let file = write_config("[accounts]\nowner = \"0x1234\"\n");
    let err = Settings::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let file = write_config("[deployment\nfee_rate = ");
    let err = Settings::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_round_trip_through_toml() {
    let settings = Settings::default();
    let text = toml::to_string(&settings).unwrap();
    assert_eq!(Settings::from_toml_str(&text).unwrap(), settings);
}

#[test]
fn test_shipped_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/fvs.toml");

    let settings = Settings::load(path).unwrap();
    assert_eq!(settings, {
        let mut expected = Settings::default();
        expected.networks = settings.networks.clone();
        expected
    });
    assert!(settings.selected_network().unwrap().1.is_local());
    assert!(!settings.network("mainnet").unwrap().1.is_local());
}
