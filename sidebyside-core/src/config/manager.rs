//! Loading and saving `config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::settings::AppSettings;

/// Name of the settings file inside the configuration directory.
pub const SETTINGS_FILE: &str = "config.toml";

/// Directory name under the platform configuration directory.
const APP_DIR: &str = "sidebyside";

/// Reads and writes settings in a configuration directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has none.
    pub fn new() -> ConfigResult<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(APP_DIR)))
    }

    /// Creates a manager for an explicit directory.
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the full path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads the settings, returning defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, cannot be parsed or
    /// holds invalid values.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let path = self.settings_path();
        let _span = crate::trace_operation_debug!(
            crate::tracing::span_names::CONFIG_LOAD,
            path = %path.display()
        )
        .entered();

        if !path.exists() {
            tracing::debug!("Settings file missing, using defaults");
            return Ok(AppSettings::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;
        let settings: AppSettings =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes the settings, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or cannot be written.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        settings.validate()?;
        let path = self.settings_path();
        let _span = crate::trace_operation_debug!(
            crate::tracing::span_names::CONFIG_SAVE,
            path = %path.display()
        )
        .entered();

        fs::create_dir_all(&self.config_dir).map_err(|e| ConfigError::Write {
            path: self.config_dir.clone(),
            source: e,
        })?;
        let content =
            toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(&path, content).map_err(|e| ConfigError::Write { path, source: e })
    }
}
