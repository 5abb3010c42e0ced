//! Optional JSON payload delivered on stdin.
//!
//! Claude Code pipes a JSON document describing the event to the hook.
//! When the hook is run by hand from a terminal there is nothing to read,
//! so stdin is skipped entirely instead of blocking on it.

use serde_json::{Map, Value};
use std::io::{IsTerminal, Read};
use tracing::debug;

fn empty() -> Value {
    Value::Object(Map::new())
}

/// Read the payload from the process's stdin.
pub fn read_stdin_payload() -> Value {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return empty();
    }
    read_payload(stdin.lock())
}

/// Drain `reader` and parse it as JSON.
///
/// Empty input, read errors and malformed JSON all yield `{}`.
pub fn read_payload<R: Read>(mut reader: R) -> Value {
    let mut bytes = Vec::new();
    if let Err(e) = reader.read_to_end(&mut bytes) {
        debug!("failed to read payload: {e}");
        return empty();
    }

    let text = String::from_utf8_lossy(&bytes);
    let raw = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if raw.is_empty() {
        return empty();
    }

    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            debug!("ignoring malformed payload: {e}");
            empty()
        }
    }
}
