//! Core type definitions for the side-by-side split
//!
//! This module contains the identifier types, geometry values and
//! small enums shared by the divider, the pane slots and the host.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a pane container.
///
/// Containers are the opaque attachment targets the host hands to child
/// components. A fresh pair is opened every time children are recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub Uuid);

impl ContainerId {
    /// Creates a new random container ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container({})", self.0)
    }
}

/// Opaque handle to the control a component exposes to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlHandle(pub Uuid);

impl ControlHandle {
    /// Creates a new random control handle.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ControlHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ControlHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Control({})", self.0)
    }
}

/// Position of the host inside the surrounding shell (editor group index).
///
/// Forwarded to children together with visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupPosition(pub u8);

impl GroupPosition {
    /// Creates a new group position.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the position index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for GroupPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// Which side of the split a pane occupies.
///
/// The detail pane sits at the start edge, left of the divider. The master
/// pane fills the remainder and is the one that receives focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSide {
    /// Start-edge pane, left of the divider.
    Detail,
    /// End-edge pane, right of the divider.
    Master,
}

impl fmt::Display for PaneSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Detail => write!(f, "detail"),
            Self::Master => write!(f, "master"),
        }
    }
}

/// Size of the container supplied by the shell on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimension {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimension {
    /// Creates a new dimension.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An absolutely positioned rectangle inside the host's parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    /// Offset from the start edge.
    pub left: u32,
    /// Offset from the top edge.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Region {
    /// Creates a new region.
    #[must_use]
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns the end edge (`left + width`).
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.left.saturating_add(self.width)
    }

    /// Returns the size of this region as a dimension.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[left={} top={} width={} height={}]",
            self.left, self.top, self.width, self.height
        )
    }
}

/// Lifecycle phase of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostPhase {
    /// No input and no children.
    #[default]
    Empty,
    /// Input assigned, child creation in flight.
    Creating,
    /// Both children created, visible and laid out.
    Ready,
}

impl fmt::Display for HostPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Creating => write!(f, "Creating"),
            Self::Ready => write!(f, "Ready"),
        }
    }
}
