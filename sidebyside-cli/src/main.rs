//! `SideBySide` CLI - Command-line driver for the `SideBySide` dual-pane host
//!
//! Computes layouts, replays divider drags and runs a host against a demo
//! component registry, so the engine can be exercised without a GUI.

mod cli;
mod commands;
mod demo;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use sidebyside_core::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    if !cli.quiet {
        let config = util::load_settings(config_path).map_or_else(
            |_| TracingConfig::new().with_level(TracingLevel::from_verbosity(cli.verbose)),
            |settings| util::tracing_config(&settings.logging, cli.verbose),
        );
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: {e}");
        }
    }

    let result = commands::dispatch(config_path, cli.format, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
