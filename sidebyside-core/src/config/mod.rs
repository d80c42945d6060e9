//! Configuration management for `SideBySide`
//!
//! This module provides the `ConfigManager` for loading and saving
//! settings in TOML format.

mod manager;
mod settings;

pub use manager::{ConfigManager, SETTINGS_FILE};
pub use settings::{AppSettings, LogTarget, LoggingSettings, SplitSettings};
