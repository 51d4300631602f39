//! Tracing helpers for command dispatch

/// Log elapsed time since `start` for a command phase
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.start, "load_config");
/// ```
macro_rules! trace_command {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command;
