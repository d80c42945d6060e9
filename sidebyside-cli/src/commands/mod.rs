//! Command handler modules for the CLI.

mod config;
mod layout;
mod open;

use std::path::Path;

use crate::cli::{Commands, OutputFormat};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(
    config_path: Option<&Path>,
    format: OutputFormat,
    command: Commands,
) -> Result<(), CliError> {
    match command {
        Commands::Layout {
            width,
            height,
            offset,
        } => layout::cmd_layout(config_path, format, width, height, offset),
        Commands::Drag {
            width,
            height,
            delta,
        } => layout::cmd_drag(config_path, format, width, height, &delta),
        Commands::Open {
            master,
            detail,
            then,
            width,
            height,
            preserve_focus,
        } => open::cmd_open(
            config_path,
            format,
            open::OpenParams {
                master,
                detail,
                then,
                width,
                height,
                preserve_focus,
            },
        ),
        Commands::Config(subcmd) => config::cmd_config(config_path, format, subcmd),
    }
}
