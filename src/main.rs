//! perfindex - student performance index predictor
//!
//! Validates a student record, normalizes it into a feature vector and
//! asks a trained regression model for a performance index.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use perfindex_core::error::{ExitCode as PerfIndexExitCode, InferenceError, PerfIndexError};
use perfindex_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Clap fails before `Cli.format` exists; honor a JSON request anyway.
        Err(err) if argv_requests_json() => {
            let error = usage_error(err);
            eprintln!("{}", error.to_json());
            return ExitCode::from(error.exit_code() as u8);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let code = match commands::dispatch::run(&cli, start) {
        Ok(()) => PerfIndexExitCode::Success,
        Err(e) => {
            report_error(&cli, &e);
            e.exit_code()
        }
    };

    tracing::debug!(elapsed = ?start.elapsed(), code = code as i32, "exit");
    ExitCode::from(code as u8)
}

/// Map a clap failure onto the perfindex error envelope
fn usage_error(err: clap::Error) -> PerfIndexError {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::ArgumentConflict => PerfIndexError::UsageError(err.to_string()),
        _ => PerfIndexError::Other(err.to_string()),
    }
}

/// Print a command failure to stderr
///
/// A rejected record has already had its errors printed to stdout; only the
/// summary line goes to stderr here.
fn report_error(cli: &Cli, err: &PerfIndexError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
        return;
    }
    if cli.quiet {
        return;
    }

    eprintln!("error: {}", err);
    if matches!(err, PerfIndexError::Inference(InferenceError::NoModel)) {
        eprintln!("hint: pass --model, set PERFINDEX_MODEL, or set [model] path in config.toml");
    }
}

/// Whether argv asks for JSON output; matches `OutputFormat`'s case-insensitive parse
fn argv_requests_json() -> bool {
    let is_json = |v: &str| v.eq_ignore_ascii_case("json");
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| is_json(&v)) {
                return true;
            }
        } else if arg.strip_prefix("--format=").is_some_and(is_json) {
            return true;
        }
    }
    false
}
