//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use perfindex_core::config::PerfIndexConfig;
use perfindex_core::error::Result;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load configuration and apply command-line overrides
    pub fn config(&self, model: Option<PathBuf>, timeout_ms: Option<u64>) -> Result<PerfIndexConfig> {
        let config = PerfIndexConfig::discover(self.cli.config.as_deref())?
            .with_overrides(model, timeout_ms);
        trace_command!(self.start, "load_config");
        Ok(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Validate(input) => commands::validate::execute(ctx, input),
            Commands::Features(input) => commands::features::execute(ctx, input),
            Commands::Predict {
                input,
                model,
                timeout_ms,
            } => commands::predict::execute(ctx, input, model, *timeout_ms),
            Commands::Model(model) => commands::model::execute(ctx, model),
        }
    }
}
