//! One side of the split: a component, its container and its region
//!
//! Both panes go through the same [`PaneSlot`] code path. Every operation
//! that reaches the component is guarded on the slot holding one, and
//! [`PaneSlot::dispose`] takes the component out, so a disposed component
//! can never be resized, focused or shown again.

use std::fmt;
use std::sync::Arc;

use crate::component::PaneComponent;

use super::types::{ContainerId, ControlHandle, GroupPosition, PaneSide, Region};

/// Opaque attachment target handed to a child component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneContainer {
    /// Unique identifier of this container.
    pub id: ContainerId,
    /// Side of the split the container belongs to.
    pub side: PaneSide,
}

impl PaneContainer {
    /// Opens a fresh container for a side.
    #[must_use]
    pub fn new(side: PaneSide) -> Self {
        Self {
            id: ContainerId::new(),
            side,
        }
    }
}

/// Holder for one child component.
pub struct PaneSlot {
    side: PaneSide,
    component: Option<Arc<dyn PaneComponent>>,
    container: Option<PaneContainer>,
    region: Option<Region>,
}

impl PaneSlot {
    /// Creates an empty slot for a side.
    #[must_use]
    pub const fn new(side: PaneSide) -> Self {
        Self {
            side,
            component: None,
            container: None,
            region: None,
        }
    }

    /// Returns the side this slot serves.
    #[must_use]
    pub const fn side(&self) -> PaneSide {
        self.side
    }

    /// Replaces the container with a fresh one and returns it.
    ///
    /// Must only be called while the slot holds no component.
    pub fn open_container(&mut self) -> PaneContainer {
        debug_assert!(self.component.is_none(), "slot still holds a component");
        let container = PaneContainer::new(self.side);
        self.container = Some(container);
        container
    }

    /// Returns the current container, if one is open.
    #[must_use]
    pub const fn container(&self) -> Option<PaneContainer> {
        self.container
    }

    /// Commits a created component into the slot.
    pub fn install(&mut self, component: Arc<dyn PaneComponent>) {
        debug_assert!(self.component.is_none(), "slot already holds a component");
        self.component = Some(component);
        self.region = None;
    }

    /// Returns a shared handle to the component, if present.
    #[must_use]
    pub fn component(&self) -> Option<Arc<dyn PaneComponent>> {
        self.component.clone()
    }

    /// Returns true if the slot holds a component.
    #[must_use]
    pub(crate) const fn is_occupied(&self) -> bool {
        self.component.is_some()
    }

    /// Returns the last region applied to the component.
    #[must_use]
    pub fn region(&self) -> Option<Region> {
        self.component.as_ref().and(self.region)
    }

    /// Applies a region to the component. No-op when empty.
    pub fn resize(&mut self, region: Region) {
        if let Some(component) = &self.component {
            component.resize(region);
            self.region = Some(region);
        }
    }

    /// Forwards visibility to the component. No-op when empty.
    pub fn set_visible(&self, visible: bool, position: Option<GroupPosition>) {
        if let Some(component) = &self.component {
            component.set_visible(visible, position);
        }
    }

    /// Focuses the component. No-op when empty.
    pub fn focus(&self) {
        if let Some(component) = &self.component {
            component.focus();
        }
    }

    /// Returns the component's control, if present.
    #[must_use]
    pub fn control(&self) -> Option<ControlHandle> {
        self.component.as_ref().map(|c| c.control())
    }

    /// Disposes the component and drops the container.
    ///
    /// Returns true if a component was disposed. Calling this on an empty
    /// slot only closes the container.
    pub fn dispose(&mut self) -> bool {
        self.container = None;
        self.region = None;
        match self.component.take() {
            Some(component) => {
                tracing::debug!(side = %self.side, "Disposing pane component");
                component.dispose();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for PaneSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneSlot")
            .field("side", &self.side)
            .field("occupied", &self.is_occupied())
            .field("container", &self.container)
            .field("region", &self.region)
            .finish()
    }
}
