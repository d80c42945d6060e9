//! CLI error types and exit codes.

use sidebyside_core::{ConfigError, SplitError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, validation, or other non-content errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Content failure - a component could not be resolved, created or fed
    pub const CONTENT_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A child component could not show its content
    #[error("Content error: {0}")]
    Content(String),

    /// Host error unrelated to content
    #[error("Host error: {0}")]
    Host(String),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Runtime setup error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<SplitError> for CliError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::NoHandler { .. }
            | SplitError::Instantiate { .. }
            | SplitError::ChildSetInput { .. } => Self::Content(err.to_string()),
            SplitError::NotCreated | SplitError::HostDisposed => Self::Host(err.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, arguments, host, IO)
    /// - 2: Content failure (no handler, instantiate or input failure)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Content(_) => exit_codes::CONTENT_FAILURE,
            Self::Config(_)
            | Self::InvalidArgument(_)
            | Self::Host(_)
            | Self::Serialization(_)
            | Self::Runtime(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
