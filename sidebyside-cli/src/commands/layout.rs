//! Layout and drag commands.

use std::path::Path;

use serde::Serialize;
use sidebyside_core::split::{Dimension, Divider, compute_regions};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{LayoutView, print_json, print_layout};
use crate::util::load_settings;

/// One applied drag delta
#[derive(Debug, Serialize)]
struct DragStep {
    delta: i32,
    moved: bool,
    #[serde(flatten)]
    layout: LayoutView,
}

/// Builds a divider for a container using the configured bounds.
fn divider_for(
    config_path: Option<&Path>,
    width: u32,
    height: u32,
    offset: Option<u32>,
) -> Result<(Divider, Dimension), CliError> {
    if width == 0 || height == 0 {
        return Err(CliError::InvalidArgument(format!(
            "container must not be empty, got {width}x{height}"
        )));
    }
    let settings = load_settings(config_path)?;
    let mut divider = Divider::new(settings.split.min_offset);
    divider.initialize(
        width,
        offset.unwrap_or_else(|| settings.split.effective_initial_offset()),
    );
    Ok((divider, Dimension::new(width, height)))
}

/// Layout command handler
pub fn cmd_layout(
    config_path: Option<&Path>,
    format: OutputFormat,
    width: u32,
    height: u32,
    offset: Option<u32>,
) -> Result<(), CliError> {
    let (divider, dimension) = divider_for(config_path, width, height, offset)?;
    if let Some(requested) = offset
        && requested != divider.offset()
    {
        tracing::info!(requested, offset = divider.offset(), "Offset clamped into bounds");
    }

    let view = LayoutView::new(&divider, compute_regions(dimension, divider.offset()));
    match format {
        OutputFormat::Table => print_layout(&view),
        OutputFormat::Json => print_json(&view)?,
    }
    Ok(())
}

/// Drag command handler
pub fn cmd_drag(
    config_path: Option<&Path>,
    format: OutputFormat,
    width: u32,
    height: u32,
    deltas: &[i32],
) -> Result<(), CliError> {
    let (mut divider, dimension) = divider_for(config_path, width, height, None)?;

    let steps: Vec<DragStep> = deltas
        .iter()
        .map(|&delta| {
            let moved = divider.drag(delta);
            DragStep {
                delta,
                moved,
                layout: LayoutView::new(&divider, compute_regions(dimension, divider.offset())),
            }
        })
        .collect();

    match format {
        OutputFormat::Table => {
            for (index, step) in steps.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                let note = if step.moved { "" } else { " (unchanged)" };
                println!("drag {:+}{note}", step.delta);
                print_layout(&step.layout);
            }
        }
        OutputFormat::Json => print_json(&steps)?,
    }
    Ok(())
}
