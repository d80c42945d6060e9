//! Settings stored in `config.toml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::split::DEFAULT_MIN_OFFSET;
use crate::tracing::{TracingConfig, TracingLevel, TracingOutput};

/// Top-level application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Split layout settings (`[split]`)
    #[serde(default)]
    pub split: SplitSettings,
    /// Logging settings (`[logging]`)
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppSettings {
    /// Checks that the settings describe a usable layout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a value is out of range.
    pub fn validate(&self) -> ConfigResult<()> {
        self.split.validate()?;
        self.logging.validate()
    }
}

/// Divider configuration (stored under `[split]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSettings {
    /// Minimum width of the detail pane, and of the master pane (default: 220)
    #[serde(default = "default_min_offset")]
    pub min_offset: u32,
    /// Divider position when the host is created (default: `min_offset`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_offset: Option<u32>,
}

const fn default_min_offset() -> u32 {
    DEFAULT_MIN_OFFSET
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            min_offset: default_min_offset(),
            initial_offset: None,
        }
    }
}

impl SplitSettings {
    /// Creates settings with the given minimum offset.
    #[must_use]
    pub const fn with_min_offset(min_offset: u32) -> Self {
        Self {
            min_offset,
            initial_offset: None,
        }
    }

    /// Sets the initial divider offset.
    #[must_use]
    pub const fn initial_offset(mut self, offset: u32) -> Self {
        self.initial_offset = Some(offset);
        self
    }

    /// Returns the initial offset, falling back to the minimum.
    #[must_use]
    pub fn effective_initial_offset(&self) -> u32 {
        self.initial_offset.unwrap_or(self.min_offset)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.min_offset == 0 {
            return Err(ConfigError::Validation {
                field: "split.min_offset".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if let Some(initial) = self.initial_offset
            && initial < self.min_offset
        {
            return Err(ConfigError::Validation {
                field: "split.initial_offset".to_string(),
                reason: format!("{initial} is below min_offset {}", self.min_offset),
            });
        }
        Ok(())
    }
}

/// Logging configuration (stored under `[logging]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level name: error, warn, info, debug or trace (default: info)
    #[serde(default = "default_level")]
    pub level: String,
    /// Custom `EnvFilter` directive, overrides `level` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Where log lines are written (default: stderr)
    #[serde(default)]
    pub output: LogTarget,
    /// Log file path, required when `output = "file"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Log destination names accepted under `[logging] output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// Standard error
    #[default]
    Stderr,
    /// Standard output
    Stdout,
    /// The file named by `[logging] file`
    File,
}

fn default_level() -> String {
    TracingLevel::Info.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            filter: None,
            output: LogTarget::default(),
            file: None,
        }
    }
}

impl LoggingSettings {
    /// Builds the tracing configuration these settings describe.
    #[must_use]
    pub fn to_tracing_config(&self) -> TracingConfig {
        let level = self.level.parse().unwrap_or_default();
        let output = match (self.output, &self.file) {
            (LogTarget::Stdout, _) => TracingOutput::Stdout,
            (LogTarget::File, Some(path)) => TracingOutput::File { path: path.clone() },
            (LogTarget::Stderr | LogTarget::File, _) => TracingOutput::Stderr,
        };
        let config = TracingConfig::new().with_level(level).with_output(output);
        match &self.filter {
            Some(filter) => config.with_filter(filter.clone()),
            None => config,
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.level.parse::<TracingLevel>().is_err() {
            return Err(ConfigError::Validation {
                field: "logging.level".to_string(),
                reason: format!("unknown level '{}'", self.level),
            });
        }
        if self.output == LogTarget::File && self.file.is_none() {
            return Err(ConfigError::Validation {
                field: "logging.file".to_string(),
                reason: "required when output is \"file\"".to_string(),
            });
        }
        Ok(())
    }
}
