use anyhow::{Context, Result};
use clap::Parser;
use fvs_cli::{deploy, CliArgs};
use fvs_config::{LogFormat, LoggingConfig};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let cli = CliArgs::parse();
    let settings = cli.settings().context("failed to load configuration")?;

    init_tracing(&settings.logging)?;
    info!(target: "fvs", version = fvs_cli::VERSION, "fvs-cli starting");

    let deployment = deploy::run(&settings)?;

    // stdout carries only the two addresses, in deployment order.
    println!("{}", deployment.registry.address());
    println!("{}", deployment.wallet.address());
    Ok(())
}

/// Installs the subscriber on stderr. `RUST_LOG` wins over the configured
/// level.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)
            .with_context(|| format!("invalid log filter '{}'", logging.level))?,
    };

    let builder = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);
    let _ = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    Ok(())
}
