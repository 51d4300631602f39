//! `perfindex validate` command - check a record and report every problem
//!
//! Exit 0 when the record is valid, 3 when it is rejected.
//!
//! Example usage:
//! - `perfindex validate student.json`
//! - `echo '{"hours_studied": 7}' | perfindex validate --format json`

use perfindex_core::error::{PerfIndexError, Result};
use perfindex_core::{validate_input, ValidatedRecord, ValidationOutcome};

use crate::cli::{Cli, InputArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::input::read_record;
use crate::output_by_format_result;

/// Execute the validate command
pub fn execute(ctx: &CommandContext, input: &InputArgs) -> Result<()> {
    let record = validate_args(ctx, input)?;
    output_by_format_result!(ctx.cli.format,
        json => print_outcome_json(&ValidationOutcome::Valid(record)),
        human => {
            if !ctx.cli.quiet {
                println!("valid");
            }
        }
    )
}

/// Read and validate the record, printing the errors if it is rejected
pub fn validate_args(ctx: &CommandContext, input: &InputArgs) -> Result<ValidatedRecord> {
    let record = read_record(input)?;
    let outcome = validate_input(&record);
    trace_command!(ctx.start, "validate_input");

    if !outcome.is_valid() {
        report_rejection(ctx.cli, &outcome)?;
    }
    outcome
        .into_result()
        .map_err(|errors| PerfIndexError::Rejected {
            error_count: errors.len(),
        })
}

fn report_rejection(cli: &Cli, outcome: &ValidationOutcome) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_outcome_json(outcome),
        human => {
            println!("invalid");
            for message in outcome.messages() {
                println!("  - {}", message);
            }
        }
    )
}

fn print_outcome_json(outcome: &ValidationOutcome) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}
