//! Command line interface definition

use clap::{Arg, Command};

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "research.toml";

/// Build the command line interface
#[must_use]
pub fn command() -> Command {
    Command::new("research-service")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Candle research service: close-price aggregation over OHLCV batches")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("routes")
                .long("routes")
                .help("Print available routes and exit")
                .action(clap::ArgAction::SetTrue),
        )
}
