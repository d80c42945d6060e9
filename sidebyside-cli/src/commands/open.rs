//! Open command: runs a host against the demo registry.

use std::path::Path;

use serde::Serialize;
use sidebyside_core::component::{ContentDescriptor, DescriptorPair, InputOptions};
use sidebyside_core::split::{
    Dimension, GroupPosition, HostPhase, InputOutcome, Region, SplitPaneHost,
};

use crate::cli::OutputFormat;
use crate::demo::demo_registry;
use crate::error::CliError;
use crate::format::{RegionView, print_json, print_regions};
use crate::util::load_settings;

/// Parameters for the open command
pub struct OpenParams {
    pub master: ContentDescriptor,
    pub detail: ContentDescriptor,
    pub then: Vec<DescriptorPair>,
    pub width: u32,
    pub height: u32,
    pub preserve_focus: bool,
}

/// Result of one `set_input` call
#[derive(Debug, Serialize)]
struct StepReport {
    master: String,
    detail: String,
    outcome: &'static str,
    generation: u64,
    offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    regions: Option<[RegionView; 2]>,
}

const fn outcome_label(outcome: InputOutcome) -> &'static str {
    match outcome {
        InputOutcome::Reused => "reused",
        InputOutcome::Committed => "committed",
        InputOutcome::Superseded => "superseded",
    }
}

fn report(host: &SplitPaneHost, pair: &DescriptorPair, outcome: InputOutcome) -> StepReport {
    StepReport {
        master: pair.master.to_string(),
        detail: pair.detail.to_string(),
        outcome: outcome_label(outcome),
        generation: host.generation(),
        offset: host.divider_offset(),
        regions: host
            .regions()
            .map(|regions| [regions.detail.into(), regions.master.into()]),
    }
}

/// Open command handler
pub fn cmd_open(
    config_path: Option<&Path>,
    format: OutputFormat,
    params: OpenParams,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(format!("Failed to start runtime: {e}")))?;

    let host = SplitPaneHost::with_registry(demo_registry(), &settings.split);
    host.create(Region::new(0, 0, params.width, params.height))?;
    host.set_visible(true, Some(GroupPosition::new(0)));
    host.layout(Dimension::new(params.width, params.height));

    let options = InputOptions {
        preserve_focus: params.preserve_focus,
        ..InputOptions::default()
    };
    let pairs = std::iter::once(DescriptorPair::new(params.master, params.detail))
        .chain(params.then);

    let mut reports = Vec::new();
    let mut failure = None;
    for pair in pairs {
        match runtime.block_on(host.set_input(pair.clone(), options)) {
            Ok(outcome) => reports.push(report(&host, &pair, outcome)),
            Err(e) => {
                tracing::warn!(pair = %pair, error = %e, "Open failed");
                failure = Some(e);
                break;
            }
        }
    }

    let phase = host.phase();
    host.dispose();

    match format {
        OutputFormat::Table => print_table(&reports, phase),
        OutputFormat::Json => print_json(&reports)?,
    }

    failure.map_or(Ok(()), |e| Err(e.into()))
}

fn print_table(reports: &[StepReport], phase: HostPhase) {
    for (index, step) in reports.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!(
            "step {}: {} (generation {}, offset {})",
            index + 1,
            step.outcome,
            step.generation,
            step.offset
        );
        println!("  master: {}", step.master);
        println!("  detail: {}", step.detail);
        if let Some([detail, master]) = &step.regions {
            print_regions(detail, master);
        }
    }
    println!("\nfinal phase: {phase:?}");
}
