use std::path::PathBuf;

use clap::Args;

/// Where to read the student record from
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// JSON file with the record ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Inline JSON record
    #[arg(long, conflicts_with = "input")]
    pub data: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Model artifact path (overrides config)
    #[arg(long, env = "PERFINDEX_MODEL")]
    pub model: Option<PathBuf>,
}
