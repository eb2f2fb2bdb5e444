//! CLI argument parsing tests.

use clap::Parser;
use fvs_cli::CliArgs;
use fvs_config::{LogFormat, Settings};
use fvs_primitives::Address;
use std::path::PathBuf;

#[test]
fn test_no_arguments() {
    let args = CliArgs::try_parse_from(["fvs-cli"]).unwrap();
    assert_eq!(args.network, None);
    assert_eq!(args.fee_rate, None);
    assert_eq!(args.owner, None);
    assert_eq!(args.user, None);
    assert_eq!(args.log_level, None);
    assert!(!args.json_logs);
}

#[test]
fn test_config_path() {
    let args = CliArgs::try_parse_from(["fvs-cli", "-c", "fvs.toml"]).unwrap();
    assert_eq!(args.config, Some(PathBuf::from("fvs.toml")));

    let args = CliArgs::try_parse_from(["fvs-cli", "--config", "/etc/fvs/fvs.toml"]).unwrap();
    assert_eq!(args.config, Some(PathBuf::from("/etc/fvs/fvs.toml")));
}

#[test]
fn test_all_overrides() {
    let owner = Address::dev_account(4);
    let user = Address::dev_account(5);
    let owner_arg = owner.to_string();
    let user_arg = user.to_string().trim_start_matches("0x").to_uppercase();

    let args = CliArgs::try_parse_from([
        "fvs-cli",
        "--network",
        "hardhat",
        "--fee-rate",
        "42",
        "--owner",
        owner_arg.as_str(),
        "--user",
        user_arg.as_str(),
        "--log-level",
        "fvs=debug",
        "--json-logs",
    ])
    .unwrap();

    assert_eq!(args.network.as_deref(), Some("hardhat"));
    assert_eq!(args.fee_rate, Some(42));
    assert_eq!(args.owner, Some(owner));
    assert_eq!(args.user, Some(user));

    let mut settings = Settings::default();
    args.apply_to(&mut settings).unwrap();
    assert_eq!(settings.deployment.fee_rate, 42);
    assert_eq!(settings.accounts.owner(), owner);
    assert_eq!(settings.accounts.user(), user);
    assert_eq!(settings.logging.level, "fvs=debug");
    assert_eq!(settings.logging.format, LogFormat::Json);
}

#[test]
fn test_invalid_values_are_rejected_by_parser() {
    assert!(CliArgs::try_parse_from(["fvs-cli", "--owner", "0x1234"]).is_err());
    assert!(CliArgs::try_parse_from(["fvs-cli", "--fee-rate", "-1"]).is_err());
    assert!(CliArgs::try_parse_from(["fvs-cli", "--fee-rate", "abc"]).is_err());
    assert!(CliArgs::try_parse_from(["fvs-cli", "--bogus"]).is_err());
}

#[test]
fn test_unknown_network_fails_validation() {
    let args = CliArgs::try_parse_from(["fvs-cli", "--network", "sepolia"]).unwrap();
    let mut settings = Settings::default();
    assert!(args.apply_to(&mut settings).is_err());
}

#[test]
fn test_settings_without_config_file_are_defaults() {
    let args = CliArgs::try_parse_from(["fvs-cli"]).unwrap();
    assert_eq!(args.settings().unwrap(), Settings::default());
}
