//! Error types for split host operations
//!
//! This module defines the error type and the outcome enum returned by
//! [`SplitPaneHost::set_input`](super::SplitPaneHost::set_input).

use crate::component::{ComponentError, ContentKind};

use super::types::PaneSide;

/// Errors that can occur while assigning input to the split host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// No component constructor is registered for the content kind.
    #[error("no component registered for content kind '{kind}'")]
    NoHandler {
        /// The kind that could not be resolved.
        kind: ContentKind,
    },

    /// A constructor failed to produce a component.
    #[error("{side} component failed to instantiate: {source}")]
    Instantiate {
        /// Side the component was created for.
        side: PaneSide,
        /// Underlying component error.
        #[source]
        source: ComponentError,
    },

    /// A child component rejected the descriptor delivered to it.
    #[error("{side} component rejected its input: {source}")]
    ChildSetInput {
        /// Side whose component failed.
        side: PaneSide,
        /// Underlying component error.
        #[source]
        source: ComponentError,
    },

    /// Input was assigned before the host was created.
    #[error("split host has not been created")]
    NotCreated,

    /// Input was assigned after the host was disposed.
    #[error("split host has been disposed")]
    HostDisposed,
}

impl SplitError {
    /// Returns the pane side the error originated from, if any.
    #[must_use]
    pub const fn side(&self) -> Option<PaneSide> {
        match self {
            Self::Instantiate { side, .. } | Self::ChildSetInput { side, .. } => Some(*side),
            Self::NoHandler { .. } | Self::NotCreated | Self::HostDisposed => None,
        }
    }
}

/// Result type alias for split host operations.
pub type SplitResult<T> = std::result::Result<T, SplitError>;

/// Result of a successful `set_input` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input matched the current one and was delivered to the existing
    /// children.
    Reused,
    /// Fresh children were created and committed.
    Committed,
    /// A newer input or a clear arrived while this call was in flight; its
    /// result was discarded.
    Superseded,
}

impl InputOutcome {
    /// Returns true if the existing children were reused.
    #[must_use]
    pub const fn is_reused(self) -> bool {
        matches!(self, Self::Reused)
    }

    /// Returns true if new children were committed.
    #[must_use]
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Committed)
    }

    /// Returns true if the call was superseded.
    #[must_use]
    pub const fn is_superseded(self) -> bool {
        matches!(self, Self::Superseded)
    }
}
