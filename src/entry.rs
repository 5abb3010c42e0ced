//! Records appended to `hooks.log`, one JSON object per line.

use crate::describe::{self, Locale};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Current time as ISO 8601 in UTC with millisecond precision,
/// e.g. `2026-01-31T12:45:31.053Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A regular log line.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub ts: String,
    pub event: String,
    pub phase: String,
    pub message: String,
    pub description: String,
    pub doc_url: String,
    pub payload: Value,
}

impl LogEntry {
    pub fn new(event: &str, phase: &str, locale: Locale, payload: Value) -> Self {
        Self {
            ts: timestamp(),
            event: event.to_string(),
            phase: phase.to_string(),
            message: describe::message(event, phase, locale),
            description: describe::description(event, phase, locale).to_string(),
            doc_url: describe::doc_url(event, locale),
            payload,
        }
    }

    /// Serialize as a single JSON line (without the trailing newline).
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Written in place of a [`LogEntry`] when the regular line could not be.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorLogEntry {
    pub ts: String,
    pub event: String,
    pub phase: String,
    pub error: String,
}

impl ErrorLogEntry {
    pub fn new(event: &str, phase: &str, error: impl ToString) -> Self {
        Self {
            ts: timestamp(),
            event: event.to_string(),
            phase: phase.to_string(),
            error: error.to_string(),
        }
    }

    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
