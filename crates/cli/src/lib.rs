//! FVS CLI Library
//!
//! Argument parsing and the deployment sequence behind the `fvs-cli` binary.

pub mod args;
pub mod deploy;

pub use args::CliArgs;
pub use deploy::{run, DeployError, Deployment};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
