//! Shared utility functions used across command modules.

use std::path::Path;

use sidebyside_core::config::{AppSettings, ConfigManager, LoggingSettings};
use sidebyside_core::{ContentDescriptor, DescriptorPair, TracingConfig, TracingLevel};

use crate::error::CliError;

/// Creates a `ConfigManager` using the optional custom config directory
/// from CLI args.
pub fn create_config_manager(config_path: Option<&Path>) -> Result<ConfigManager, CliError> {
    match config_path {
        Some(path) => Ok(ConfigManager::with_config_dir(path.to_path_buf())),
        None => ConfigManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads settings through [`create_config_manager`].
pub fn load_settings(config_path: Option<&Path>) -> Result<AppSettings, CliError> {
    create_config_manager(config_path)?
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))
}

/// Tracing setup for the configured logging settings.
///
/// Any `-v` on the command line takes precedence over the configured level
/// and filter. The configured output is kept.
pub fn tracing_config(logging: &LoggingSettings, verbose: u8) -> TracingConfig {
    let config = logging.to_tracing_config();
    if verbose > 0 {
        TracingConfig {
            filter: None,
            ..config
        }
        .with_level(TracingLevel::from_verbosity(verbose))
    } else {
        config
    }
}

/// Parse a `kind:resource` content descriptor
pub fn parse_descriptor(s: &str) -> Result<ContentDescriptor, String> {
    let (kind, resource) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid kind:resource: no `:` found in `{s}`"))?;
    if kind.is_empty() {
        return Err(format!("missing content kind in `{s}`"));
    }
    if resource.is_empty() {
        return Err(format!("missing resource in `{s}`"));
    }
    Ok(ContentDescriptor::new(kind, resource))
}

/// Parse a `master,detail` pair of `kind:resource` descriptors
pub fn parse_pair(s: &str) -> Result<DescriptorPair, String> {
    let (master, detail) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid master,detail pair: no `,` found in `{s}`"))?;
    Ok(DescriptorPair::new(
        parse_descriptor(master.trim())?,
        parse_descriptor(detail.trim())?,
    ))
}
