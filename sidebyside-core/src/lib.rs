//! `SideBySide` Core Library
//!
//! This crate provides a dual-pane host that shows two independently created
//! child components side by side, separated by a draggable divider. It keeps
//! both panes sized as the container resizes and the divider moves, and
//! reuses or recreates its children as the displayed pair changes.
//!
//! # Crate Structure
//!
//! - [`split`] - Divider, geometry, pane slots and the `SplitPaneHost` state machine
//! - [`component`] - Child component traits, content descriptors and the component registry
//! - [`config`] - Settings and persistence
//! - [`error`] - Configuration errors and the crate-wide error type
//! - [`tracing`] - Structured logging setup and span names

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod component;
pub mod config;
pub mod error;
pub mod split;
pub mod tracing;

pub use component::{
    ComponentConstructor, ComponentError, ComponentFactory, ComponentRegistry, ComponentResult,
    ContentDescriptor, ContentKind, DescriptorPair, InputOptions, PaneComponent,
};
pub use config::{AppSettings, ConfigManager, LogTarget, LoggingSettings, SplitSettings};
pub use error::{ConfigError, ConfigResult, SideBySideError};
pub use split::{
    ContainerId, ControlHandle, Dimension, Divider, GroupPosition, HostPhase, InputOutcome,
    PaneContainer, PaneSide, Region, SplitError, SplitPaneHost, SplitRegions, SplitResult,
    compute_regions,
};
pub use self::tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    is_tracing_initialized, span_names,
};
