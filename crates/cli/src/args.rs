use clap::Parser;
use fvs_config::{ConfigResult, LogFormat, Settings};
use fvs_primitives::Address;
use std::path::PathBuf;

/// Command-line arguments for fvs-cli.
///
/// Every option overrides the matching configuration entry.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "fvs-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Deploys a FeeValueStorage registry and a Wallet that reads from it"
)]
pub struct CliArgs {
    /// Path to the TOML configuration file.
    #[arg(short = 'c', long = "config", value_name = "PATH", env = "FVS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Network to deploy to (must be defined in the configuration).
    #[arg(short = 'n', long = "network", value_name = "NAME")]
    pub network: Option<String>,

    /// Initial fee rate of the registry, in basis points.
    #[arg(long = "fee-rate", value_name = "N")]
    pub fee_rate: Option<u64>,

    /// Deploying account, registry owner and wallet owner.
    #[arg(long = "owner", value_name = "ADDR")]
    pub owner: Option<Address>,

    /// Wallet user.
    #[arg(long = "user", value_name = "ADDR")]
    pub user: Option<Address>,

    /// Log filter directive, e.g. `debug` or `fvs=trace`.
    #[arg(long = "log-level", value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long = "json-logs")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Loads the configured settings, or the defaults when no file is given,
    /// and applies the command-line overrides.
    pub fn settings(&self) -> ConfigResult<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        self.apply_to(&mut settings)?;
        Ok(settings)
    }

    /// Apply command-line arguments to override configuration
    pub fn apply_to(&self, settings: &mut Settings) -> ConfigResult<()> {
        if let Some(network) = &self.network {
            settings.default_network = network.clone();
        }

        if let Some(fee_rate) = self.fee_rate {
            settings.deployment.fee_rate = fee_rate;
        }

        if let Some(owner) = self.owner {
            settings.accounts.owner = Some(owner);
        }

        if let Some(user) = self.user {
            settings.accounts.user = Some(user);
        }

        if let Some(level) = &self.log_level {
            settings.logging.level = level.clone();
        }

        if self.json_logs {
            settings.logging.format = LogFormat::Json;
        }

        settings.validate()
    }
}
