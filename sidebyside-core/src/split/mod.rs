//! Side-by-side split module
//!
//! This module provides the dual-pane host together with the divider and
//! geometry it lays its two children out with. The detail pane occupies
//! the start edge up to the divider, the master pane fills the rest.
//!
//! # Architecture
//!
//! - **Divider**: a clamped offset that follows container resizes and drags
//! - **Pane slots**: one code path for both children (component, container, region)
//! - **Generation guard**: stale asynchronous creations are discarded, never shown
//! - **Exact geometry**: both widths always sum to the container width
//!
//! # Module Structure
//!
//! - `types` - Identifiers and geometry values (`ContainerId`, `Dimension`, `Region`, `PaneSide`)
//! - `divider` - Divider state (`Divider`)
//! - `geometry` - Region computation (`compute_regions`, `SplitRegions`)
//! - `slot` - Pane slot (`PaneSlot`, `PaneContainer`)
//! - `host` - Lifecycle state machine (`SplitPaneHost`)
//! - `error` - Error types (`SplitError`, `InputOutcome`)
//!
//! # Example
//!
//! ```
//! use sidebyside_core::split::{Dimension, Divider, compute_regions};
//!
//! let mut divider = Divider::new(220);
//! divider.initialize(800, 220);
//!
//! // Dragging right by 50 pixels widens the detail pane
//! assert!(divider.drag(50));
//!
//! let regions = compute_regions(Dimension::new(800, 600), divider.offset());
//! assert_eq!(regions.detail.width, 270);
//! assert_eq!(regions.master.width, 530);
//! ```

mod divider;
mod error;
mod geometry;
mod host;
mod slot;
mod types;

pub use divider::{DEFAULT_MIN_OFFSET, Divider};
pub use error::{InputOutcome, SplitError, SplitResult};
pub use geometry::{SplitRegions, compute_regions};
pub use host::SplitPaneHost;
pub use slot::{PaneContainer, PaneSlot};
pub use types::{
    ContainerId, ControlHandle, Dimension, GroupPosition, HostPhase, PaneSide, Region,
};
