//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sidebyside_core::{ContentDescriptor, DescriptorPair};

use crate::util::{parse_descriptor, parse_pair};

/// `SideBySide` command-line interface for driving the dual-pane host
#[derive(Parser)]
#[command(name = "sidebyside-cli")]
#[command(author, version, about = "SideBySide command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "SIDEBYSIDE_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "table", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the pane regions for a container
    #[command(about = "Compute the detail and master regions for a container")]
    Layout {
        /// Container width in pixels
        #[arg(short = 'W', long)]
        width: u32,

        /// Container height in pixels
        #[arg(short = 'H', long)]
        height: u32,

        /// Divider offset (defaults to the configured initial offset)
        #[arg(short, long)]
        offset: Option<u32>,
    },

    /// Replay divider drags
    #[command(about = "Apply divider drag deltas and print the layout after each")]
    Drag {
        /// Container width in pixels
        #[arg(short = 'W', long)]
        width: u32,

        /// Container height in pixels
        #[arg(short = 'H', long)]
        height: u32,

        /// Drag delta in pixels, negative moves toward the start edge
        /// (repeatable)
        #[arg(short, long, required = true, allow_hyphen_values = true)]
        delta: Vec<i32>,
    },

    /// Run a host against the demo components
    #[command(about = "Open a content pair in a host backed by demo components")]
    Open {
        /// Master content as kind:resource (kinds: text, diff, image)
        #[arg(short, long, value_parser = parse_descriptor)]
        master: ContentDescriptor,

        /// Detail content as kind:resource
        #[arg(short, long, value_parser = parse_descriptor)]
        detail: ContentDescriptor,

        /// Follow-up pair as master,detail (repeatable)
        #[arg(short, long, value_parser = parse_pair)]
        then: Vec<DescriptorPair>,

        /// Container width in pixels
        #[arg(short = 'W', long, default_value = "800")]
        width: u32,

        /// Container height in pixels
        #[arg(short = 'H', long, default_value = "600")]
        height: u32,

        /// Keep focus where it is when new children are committed
        #[arg(long)]
        preserve_focus: bool,
    },

    /// Manage settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective settings
    #[command(about = "Print the effective settings")]
    Show,

    /// Write the default settings file
    #[command(about = "Write the default settings file")]
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
