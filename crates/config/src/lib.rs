//! FVS Configuration Module
//!
//! Configuration types for deploying the fee registry and its wallet. Settings
//! are read from TOML; every section and field is optional and falls back to
//! the defaults below.
//!
//! ```rust
//! use fvs_config::{Settings, DEFAULT_FEE_RATE};
//!
//! let settings = Settings::from_toml_str("[logging]\nformat = \"json\"\n").unwrap();
//! assert_eq!(settings.deployment.fee_rate, DEFAULT_FEE_RATE);
//! assert_eq!(settings.selected_network().unwrap().1.chain_id, 31337);
//! ```

use fvs_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Initial rate the deploy script gives a new registry.
pub const DEFAULT_FEE_RATE: u64 = 1337;

/// Name of the local development network.
pub const DEFAULT_NETWORK: &str = "hardhat";

/// Chain id of the local development network.
pub const DEFAULT_CHAIN_ID: u64 = 31337;

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Development account used as owner when none is configured.
pub const DEFAULT_OWNER_ACCOUNT: u32 = 0;

/// Development account used as user when none is configured.
pub const DEFAULT_USER_ACCOUNT: u32 = 1;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Network used when none is named on the command line.
    pub default_network: String,
    pub deployment: DeploymentConfig,
    pub accounts: AccountsConfig,
    pub logging: LoggingConfig,
    pub networks: BTreeMap<String, NetworkConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(DEFAULT_NETWORK.to_string(), NetworkConfig::default());

        Self {
            default_network: DEFAULT_NETWORK.to_string(),
            deployment: DeploymentConfig::default(),
            accounts: AccountsConfig::default(),
            logging: LoggingConfig::default(),
            networks,
        }
    }
}

impl Settings {
    /// Loads and validates settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks cross-field consistency.
    ///
    /// The default network must be defined and every network needs a
    /// non-zero chain id.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.networks.contains_key(&self.default_network) {
            return Err(ConfigError::Invalid(format!(
                "default network '{}' is not defined",
                self.default_network
            )));
        }
        if let Some((name, _)) = self.networks.iter().find(|(_, n)| n.chain_id == 0) {
            return Err(ConfigError::Invalid(format!(
                "network '{name}' has chain_id 0"
            )));
        }
        Ok(())
    }

    /// The default network and its configuration.
    pub fn selected_network(&self) -> ConfigResult<(&str, &NetworkConfig)> {
        self.network(&self.default_network)
    }

    /// Looks up a network by name.
    pub fn network(&self, name: &str) -> ConfigResult<(&str, &NetworkConfig)> {
        self.networks
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
            .ok_or_else(|| ConfigError::Invalid(format!("unknown network '{name}'")))
    }
}

/// Contract deployment parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeploymentConfig {
    /// Initial registry rate in basis points. Range checking is left to the
    /// registry's constructor.
    pub fee_rate: u64,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            fee_rate: DEFAULT_FEE_RATE,
        }
    }
}

/// Principals taking part in the deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccountsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Address>,
}

impl AccountsConfig {
    /// Configured owner, or development account 0.
    pub fn owner(&self) -> Address {
        self.owner
            .unwrap_or_else(|| Address::dev_account(DEFAULT_OWNER_ACCOUNT))
    }

    /// Configured user, or development account 1.
    pub fn user(&self) -> Address {
        self.user
            .unwrap_or_else(|| Address::dev_account(DEFAULT_USER_ACCOUNT))
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::Invalid(format!("unknown log format '{s}'"))),
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `fvs=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Text,
        }
    }
}

/// A named deployment target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    pub chain_id: u64,
    /// JSON-RPC endpoint of a remote network. Absent for the in-process host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NetworkConfig {
    /// Whether this network is executed in-process.
    pub fn is_local(&self) -> bool {
        self.url.is_none()
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            url: None,
        }
    }
}
