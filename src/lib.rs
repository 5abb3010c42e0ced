//! hooklog — Claude Code lifecycle event logger
//!
//! Invoked by Claude Code as `hooklog <event> [phase]`. Appends one JSON line
//! per invocation to `<project>/.claude/hooks.log`:
//!
//! - `event` / `describe`: event kinds and their descriptions and doc links
//! - `payload`: optional JSON from stdin
//! - `entry`: the records written to the log
//! - `config` / `sink` / `logger`: where and how lines are appended
//!
//! # Claude Code hooks config:
//! ```json
//! { "type": "command", "command": "hooklog SessionStart startup" }
//! ```

pub mod config;
pub mod describe;
pub mod entry;
pub mod event;
pub mod logger;
pub mod payload;
pub mod sink;

pub use config::LoggerConfig;
pub use describe::Locale;
pub use entry::{ErrorLogEntry, LogEntry};
pub use event::HookEventKind;
pub use logger::{Invocation, LogOutcome, log_event, log_to_file};
pub use sink::{FileSink, LogError, LogSink};
