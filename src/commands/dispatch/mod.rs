//! Command dispatch logic for perfindex

use std::time::Instant;

use crate::cli::Cli;
use perfindex_core::error::Result;

mod command;
mod macros;

pub use command::{Command, CommandContext};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);
    cli.command.execute(&ctx)
}
