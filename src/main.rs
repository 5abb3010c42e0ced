//! hooklog — append Claude Code hook events to `.claude/hooks.log`
//!
//! Always exits 0 so a logging problem never blocks the hook pipeline.

use clap::Parser;
use hooklog::{Invocation, LoggerConfig, log_to_file, payload};
use std::ffi::OsString;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(
    name = "hooklog",
    about = "Append Claude Code hook events to .claude/hooks.log",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Hook event name and optional phase, e.g. `SessionStart startup`
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        Invocation::from_args(cli.args)
    }
}

/// Parse process arguments (program name first) without ever exiting.
///
/// Anything clap rejects, such as non-UTF-8 values, is taken positionally.
/// So is any `--`, which clap would otherwise swallow as a separator.
fn parse_invocation(args: Vec<OsString>) -> Invocation {
    if args.iter().skip(1).any(|arg| arg == "--") {
        return raw_invocation(&args);
    }
    match Cli::try_parse_from(&args) {
        Ok(cli) => cli.into(),
        Err(e) => {
            debug!("falling back to raw arguments: {e}");
            raw_invocation(&args)
        }
    }
}

fn raw_invocation(args: &[OsString]) -> Invocation {
    let raw = args
        .iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    Invocation::from_args(raw)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("HOOKLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let invocation = parse_invocation(std::env::args_os().collect());
    let config = LoggerConfig::from_env();
    let payload = payload::read_stdin_payload();

    // Failures are reported by `log_event` itself; the exit code stays 0.
    let _ = log_to_file(&config, &invocation, payload);
}
