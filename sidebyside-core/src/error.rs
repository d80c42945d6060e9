//! Error types shared across the crate
//!
//! Split and component errors live next to the code that raises them
//! (`split::SplitError`, `component::ComponentError`). This module holds the
//! configuration errors and the umbrella error callers can convert into.

use std::path::PathBuf;

use thiserror::Error;

use crate::split::SplitError;
use crate::tracing::TracingError;

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no configuration directory.
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    /// The settings file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file or directory could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path that was written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for the settings schema.
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// The settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(String),

    /// A setting holds an invalid value.
    #[error("invalid setting {field}: {reason}")]
    Validation {
        /// Dotted path of the setting.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Any error raised by this crate.
#[derive(Debug, Error)]
pub enum SideBySideError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Split host error
    #[error(transparent)]
    Split(#[from] SplitError),

    /// Tracing setup error
    #[error(transparent)]
    Tracing(#[from] TracingError),
}
