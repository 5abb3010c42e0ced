//! Where the hook writes and in which language.
//!
//! - **Log file**: `<project>/.claude/hooks.log`, where `<project>` is
//!   `CLAUDE_PROJECT_DIR` when Claude Code sets it, otherwise the current
//!   directory.
//! - **Locale**: `HOOKLOG_LANG` (`zh*` for Simplified Chinese, English otherwise).

use crate::describe::Locale;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Project root set by Claude Code for hook commands.
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Language of descriptions and documentation links.
pub const LANG_ENV: &str = "HOOKLOG_LANG";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub log_path: PathBuf,
    pub locale: Locale,
}

impl LoggerConfig {
    pub fn new(log_path: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            log_path: log_path.into(),
            locale,
        }
    }

    /// Resolve from the process environment and working directory.
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let lang = std::env::var(LANG_ENV).ok();
        Self::resolve(std::env::var_os(PROJECT_DIR_ENV), &cwd, lang.as_deref())
    }

    /// Resolve from explicit values. An empty project dir counts as unset.
    pub fn resolve(project_dir: Option<OsString>, cwd: &Path, lang: Option<&str>) -> Self {
        let root = project_dir
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| cwd.to_path_buf());
        Self::new(log_path_for(&root), Locale::from_lang(lang))
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `.claude` directory of a project.
pub fn claude_dir(project_root: &Path) -> PathBuf {
    project_root.join(".claude")
}

/// Hook log file of a project.
pub fn log_path_for(project_root: &Path) -> PathBuf {
    claude_dir(project_root).join("hooks.log")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
