//! `perfindex predict` command - validate a record and predict its index
//!
//! The model artifact is only loaded once the record has been accepted, so
//! a rejected record exits 3 even when no model is configured.
//!
//! Example usage:
//! - `perfindex predict student.json --model model.json`
//! - `perfindex --format json predict --data '{"hours_studied": 7, ...}'`

use tracing::debug;

use perfindex_core::error::{InferenceError, Result};
use perfindex_core::model::LoadedModel;
use perfindex_core::PredictionService;

use crate::cli::{InputArgs, ModelArgs};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::validate::validate_args;
use crate::output_by_format_result;

/// Execute the predict command
pub fn execute(
    ctx: &CommandContext,
    input: &InputArgs,
    model_args: &ModelArgs,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let record = validate_args(ctx, input)?;

    let config = ctx.config(model_args.model.clone(), timeout_ms)?;
    let path = config.model.path.as_deref().ok_or(InferenceError::NoModel)?;
    let model = LoadedModel::load(path)?;
    trace_command!(ctx.start, "load_model");

    let mut service = PredictionService::from_model(&model);
    if let Some(timeout) = config.timeout() {
        service = service.with_timeout(timeout);
    }

    let result = service.predict(&record)?;
    debug!(
        performance_index = result.performance_index,
        fingerprint = model.fingerprint(),
        "predict"
    );

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string(&result)?);
            Ok(())
        },
        human => {
            println!("Performance Index: {}", result.performance_index);
        }
    )
}
