//! Reading the record document for record-taking commands
//!
//! Sources, in order: `--data`, the positional file, stdin (also for `-`).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::cli::InputArgs;
use perfindex_core::error::Result;
use perfindex_core::PerformanceRecord;

/// Read and parse the record named by `args`
pub fn read_record(args: &InputArgs) -> Result<PerformanceRecord> {
    let text = read_text(args)?;
    debug!(bytes = text.len(), "read_input");
    PerformanceRecord::from_json_str(&text)
}

fn read_text(args: &InputArgs) -> Result<String> {
    if let Some(data) = &args.data {
        return Ok(data.clone());
    }

    match &args.input {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}
