//! Output helpers shared by the command modules.

use serde::Serialize;
use sidebyside_core::split::{Divider, Region, SplitRegions};

use crate::error::CliError;

/// Serializable view of a pane region
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegionView {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl From<Region> for RegionView {
    fn from(region: Region) -> Self {
        Self {
            left: region.left,
            top: region.top,
            width: region.width,
            height: region.height,
        }
    }
}

/// Serializable view of one layout pass
#[derive(Debug, Clone, Serialize)]
pub struct LayoutView {
    pub offset: u32,
    pub min_offset: u32,
    pub max_offset: u32,
    pub detail: RegionView,
    pub master: RegionView,
}

impl LayoutView {
    pub fn new(divider: &Divider, regions: SplitRegions) -> Self {
        Self {
            offset: divider.offset(),
            min_offset: divider.min_offset(),
            max_offset: divider.max_offset(),
            detail: regions.detail.into(),
            master: regions.master.into(),
        }
    }
}

/// Prints a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Serialization(format!("Failed to serialize output: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Prints the two pane regions as table rows
pub fn print_regions(detail: &RegionView, master: &RegionView) {
    println!(
        "{:<8} {:>6} {:>6} {:>6} {:>6}",
        "PANE", "LEFT", "TOP", "WIDTH", "HEIGHT"
    );
    for (name, region) in [("detail", detail), ("master", master)] {
        println!(
            "{:<8} {:>6} {:>6} {:>6} {:>6}",
            name, region.left, region.top, region.width, region.height
        );
    }
}

/// Prints one layout pass as a table
pub fn print_layout(layout: &LayoutView) {
    println!(
        "offset: {} (min {}, max {})",
        layout.offset, layout.min_offset, layout.max_offset
    );
    print_regions(&layout.detail, &layout.master);
}
