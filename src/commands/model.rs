//! `perfindex model` command - load an artifact and describe it

use perfindex_core::error::{InferenceError, Result};
use perfindex_core::model::{LoadedModel, ModelInfo, ModelKind};

use crate::cli::ModelArgs;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::output_by_format_result;

/// Execute the model command
pub fn execute(ctx: &CommandContext, args: &ModelArgs) -> Result<()> {
    let config = ctx.config(args.model.clone(), None)?;
    let path = config.model.path.as_deref().ok_or(InferenceError::NoModel)?;
    let model = LoadedModel::load(path)?;
    trace_command!(ctx.start, "load_model");

    let info = model.info();
    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(info)?);
            Ok(())
        },
        human => {
            println!("Model: {}", info.path.display());
            println!("  kind: {} ({} {})", info.kind, info.size, size_unit(info));
            println!("  format_version: {}", info.format_version);
            println!("  features: {}", info.feature_names.join(", "));
            println!("  fingerprint: {}", info.fingerprint);
        }
    )
}

fn size_unit(info: &ModelInfo) -> &'static str {
    match info.kind {
        ModelKind::Linear => "coefficients",
        ModelKind::Forest => "trees",
    }
}
