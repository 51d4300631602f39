//! `perfindex features` command - print the model input for a record
//!
//! Human output lists one `name: value` pair per line; JSON output is the
//! bare feature array in model order.

use perfindex_core::error::Result;
use perfindex_core::preprocess;

use crate::cli::InputArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::validate::validate_args;
use crate::output_by_format_result;

/// Execute the features command
pub fn execute(ctx: &CommandContext, input: &InputArgs) -> Result<()> {
    let record = validate_args(ctx, input)?;
    let features = preprocess(&record);

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string(&features)?);
            Ok(())
        },
        human => {
            for (name, value) in features.named() {
                println!("{}: {}", name, value);
            }
        }
    )
}
