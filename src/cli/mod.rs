//! CLI argument parsing for perfindex
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{InputArgs, ModelArgs};
pub use perfindex_core::format::OutputFormat;
use parse::parse_format;

/// perfindex - predict a student's performance index from study habits
#[derive(Parser, Debug)]
#[command(name = "perfindex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "perfindex_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a student record and report every problem found
    Validate(InputArgs),

    /// Validate a record and print its model feature vector
    Features(InputArgs),

    /// Validate a record and predict its performance index
    Predict {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        model: ModelArgs,

        /// Inference deadline in milliseconds (0 disables it)
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Load a model artifact and describe it
    Model(ModelArgs),
}
