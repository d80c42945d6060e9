//! Settings commands.

use std::path::Path;

use sidebyside_core::config::AppSettings;

use crate::cli::{ConfigCommands, OutputFormat};
use crate::error::CliError;
use crate::format::print_json;
use crate::util::create_config_manager;

/// Config command handler
pub fn cmd_config(
    config_path: Option<&Path>,
    format: OutputFormat,
    subcmd: ConfigCommands,
) -> Result<(), CliError> {
    match subcmd {
        ConfigCommands::Show => show_settings(config_path, format),
        ConfigCommands::Init { force } => init_settings(config_path, force),
    }
}

fn show_settings(config_path: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let settings = config_manager.load_settings()?;

    match format {
        OutputFormat::Table => {
            let toml = toml::to_string_pretty(&settings)
                .map_err(|e| CliError::Serialization(format!("Failed to render settings: {e}")))?;
            println!("# {}", config_manager.settings_path().display());
            print!("{toml}");
        }
        OutputFormat::Json => print_json(&settings)?,
    }
    Ok(())
}

fn init_settings(config_path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let path = config_manager.settings_path();

    if path.exists() && !force {
        return Err(CliError::InvalidArgument(format!(
            "{} already exists, use --force to overwrite",
            path.display()
        )));
    }

    config_manager.save_settings(&AppSettings::default())?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}
