//! Region computation for the two panes
//!
//! The master width is derived first and the detail width is whatever is
//! left of the container, so the two widths always sum to the container
//! width even when the offset exceeds it.

use super::types::{Dimension, Region};

/// The pair of regions produced for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitRegions {
    /// Start-edge region, left of the divider.
    pub detail: Region,
    /// End-edge region, right of the divider.
    pub master: Region,
}

impl SplitRegions {
    /// Returns the combined width of both regions.
    #[must_use]
    pub(crate) const fn total_width(&self) -> u32 {
        self.detail.width + self.master.width
    }
}

/// Computes the detail and master regions for a container and divider offset.
///
/// The master region starts at the detail width rather than at
/// `split_offset`. The two are equal while the offset fits the container;
/// past that the master collapses to zero width at the container's end edge.
///
/// ```
/// use sidebyside_core::split::{Dimension, Region, compute_regions};
///
/// let regions = compute_regions(Dimension::new(800, 600), 220);
/// assert_eq!(regions.detail, Region::new(0, 0, 220, 600));
/// assert_eq!(regions.master, Region::new(220, 0, 580, 600));
/// ```
#[must_use]
pub const fn compute_regions(dimension: Dimension, split_offset: u32) -> SplitRegions {
    let master_width = dimension.width.saturating_sub(split_offset);
    let detail_width = dimension.width - master_width;

    SplitRegions {
        detail: Region::new(0, 0, detail_width, dimension.height),
        master: Region::new(detail_width, 0, master_width, dimension.height),
    }
}
