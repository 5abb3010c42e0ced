//! Assemble and append the log line for one hook invocation.
//!
//! Failures never escape: if the regular line cannot be written a reduced
//! error line is tried instead, and if that fails too the outcome is only
//! reported back to the caller.

use crate::config::LoggerConfig;
use crate::entry::{ErrorLogEntry, LogEntry};
use crate::sink::{FileSink, LogError, LogSink};
use serde_json::Value;
use tracing::{debug, warn};

/// Event name used when none was passed.
pub const DEFAULT_EVENT: &str = "UnknownEvent";

/// Event and phase the hook was invoked with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub event: String,
    pub phase: String,
}

impl Invocation {
    /// Build from optional positional values, applying defaults.
    ///
    /// An empty event name counts as missing.
    pub fn new(event: Option<String>, phase: Option<String>) -> Self {
        Self {
            event: event
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT.to_string()),
            phase: phase.unwrap_or_default(),
        }
    }

    /// Build from raw positional arguments (program name excluded).
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let event = args.next();
        let phase = args.next();
        Self::new(event, phase)
    }
}

/// What ended up in the log.
#[derive(Debug)]
pub enum LogOutcome {
    /// Regular entry appended
    Written,
    /// Regular entry failed; an error entry was appended instead
    Degraded { error: LogError },
    /// Nothing could be appended
    Dropped { primary: LogError, fallback: LogError },
}

impl LogOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Append one entry for `invocation` to `sink`.
pub fn log_event(
    config: &LoggerConfig,
    sink: &dyn LogSink,
    invocation: &Invocation,
    payload: Value,
) -> LogOutcome {
    sink.prepare();

    let primary = match write_entry(config, sink, invocation, payload) {
        Ok(()) => {
            debug!(event = %invocation.event, phase = %invocation.phase, "logged hook event");
            return LogOutcome::Written;
        }
        Err(e) => e,
    };
    warn!("failed to log {} event: {primary}", invocation.event);

    let fallback = ErrorLogEntry::new(&invocation.event, &invocation.phase, &primary);
    match fallback
        .to_line()
        .map_err(LogError::from)
        .and_then(|line| sink.append_line(&line))
    {
        Ok(()) => LogOutcome::Degraded { error: primary },
        Err(fallback) => {
            warn!("failed to log error entry: {fallback}");
            LogOutcome::Dropped { primary, fallback }
        }
    }
}

/// Append one entry to the log file named by `config`.
pub fn log_to_file(config: &LoggerConfig, invocation: &Invocation, payload: Value) -> LogOutcome {
    let sink = FileSink::new(&config.log_path);
    log_event(config, &sink, invocation, payload)
}

fn write_entry(
    config: &LoggerConfig,
    sink: &dyn LogSink,
    invocation: &Invocation,
    payload: Value,
) -> Result<(), LogError> {
    let entry = LogEntry::new(&invocation.event, &invocation.phase, config.locale, payload);
    let line = entry.to_line()?;
    sink.append_line(&line)
}
