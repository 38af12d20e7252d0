//! Canopy Plugin Playground (Rust)
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌────────────┐    ┌─────────────────────────────┐    ┌──────────────┐
//!   │   config   │───▶│     lifecycle::Supervisor   │───▶│   contract   │──── host
//!   │ (defaults  │    │ announce → start → wait     │    │ (plugin.sock)│
//!   │  or TOML)  │    │          → release → close  │    └──────────────┘
//!   └────────────┘    └──────────────▲──────────────┘
//!                                    │
//!                          SIGINT / SIGTERM
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use canopy_plugin::config::validation::parse_log_level;
use canopy_plugin::config::{load_config, AppConfig};
use canopy_plugin::contract::{DetachedContract, PluginContract};
use canopy_plugin::lifecycle::{Shutdown, Supervisor};
use canopy_plugin::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "canopy-plugin")]
#[command(about = "Canopy plugin process", long_about = None)]
struct Cli {
    /// TOML file overriding the default configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence.
    #[arg(short, long, value_parser = parse_log_level)]
    log_level: Option<String>,

    /// Run without connecting to a host.
    #[arg(long)]
    detached: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                init_logging(cli.log_level.as_deref().unwrap_or("info"));
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load configuration"
                );
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    init_logging(
        cli.log_level
            .as_deref()
            .unwrap_or(config.observability.log_level.as_str()),
    );

    let contract = select_contract(cli.detached);
    let supervisor =
        Supervisor::new(contract, config.plugin, Shutdown::new()).with_os_signals();

    match supervisor.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Plugin terminated");
            ExitCode::FAILURE
        }
    }
}

#[cfg(unix)]
fn select_contract(detached: bool) -> Box<dyn PluginContract> {
    if detached {
        Box::new(DetachedContract::new())
    } else {
        Box::new(canopy_plugin::contract::UnixSocketContract::new())
    }
}

#[cfg(not(unix))]
fn select_contract(_detached: bool) -> Box<dyn PluginContract> {
    Box::new(DetachedContract::new())
}
