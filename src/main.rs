#![forbid(unsafe_code)]

//! `outcome-demo`: resolves an id through a configured lookup cascade.
//!
//! Each layer in the TOML config either answers or fails with a named
//! failure; the cascade shows which recovery points fire and which layer
//! finally answered.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use outcome::config::LookupConfig;
use outcome::lookup::LayeredLookup;
use outcome::{Error, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
enum Strategy {
    /// Each layer only handles the failures listed in its `recovers_from`.
    #[default]
    Cascade,
    /// The first layer that answers wins.
    First,
}

#[derive(Debug, Parser)]
#[command(name = "outcome-demo", about = "Layered lookup demo", version, long_about = None)]
struct Cli {
    /// Path to the TOML lookup configuration.
    #[arg(long)]
    config: PathBuf,

    /// Identifier to resolve.
    #[arg(long, default_value_t = 1)]
    id: u64,

    /// Resolution strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Cascade)]
    strategy: Strategy,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("outcome-demo bootstrap");

    let config = LookupConfig::load_from_path(&args.config)?;
    let lookup = LayeredLookup::from_config(&config)?;
    info!(layers = config.layers.len(), "configuration loaded");

    let resolved = match args.strategy {
        Strategy::Cascade => lookup.resolve(args.id),
        Strategy::First => lookup.resolve_first(args.id),
    };

    match resolved {
        Ok(resolution) => {
            println!("{} (from {})", resolution.value, resolution.source);
            Ok(())
        }
        Err(err) => {
            error!(%err, id = args.id, "lookup failed");
            Err(err)
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| Error::msg(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| Error::msg(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
