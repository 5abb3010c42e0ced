//! Append-only destination for log lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while producing or writing a log line
#[derive(Error, Debug)]
pub enum LogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Somewhere log lines can be appended.
pub trait LogSink {
    /// Best-effort setup before the first append. Must not fail.
    fn prepare(&self) {}

    /// Append `line` followed by a newline as one write.
    fn append_line(&self, line: &str) -> Result<(), LogError>;
}

/// Appends to a file, creating it (and its directory) on demand.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LogSink for FileSink {
    fn prepare(&self) {
        let Some(dir) = self.path.parent() else {
            return;
        };
        if let Err(e) = std::fs::create_dir_all(dir) {
            // The append below will fail too and take the fallback path.
            debug!("failed to create {}: {e}", dir.display());
        }
    }

    fn append_line(&self, line: &str) -> Result<(), LogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Single write so concurrent hooks appending to the same file
        // don't interleave within a line.
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prepare_creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/.claude/hooks.log");
        let sink = FileSink::new(&path);

        sink.prepare();

        assert!(path.parent().unwrap().is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn prepare_ignores_failure() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "not a dir").unwrap();

        // Parent is a regular file, so create_dir_all fails.
        let sink = FileSink::new(blocker.join(".claude/hooks.log"));
        sink.prepare();
    }

    #[test]
    fn append_creates_and_appends() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hooks.log");
        let sink = FileSink::new(&path);

        sink.append_line("{\"n\":1}").unwrap();
        sink.append_line("{\"n\":2}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"n\":1}\n{\"n\":2}\n");
    }

    #[test]
    fn append_keeps_existing_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hooks.log");
        fs::write(&path, "existing\n").unwrap();

        FileSink::new(&path).append_line("new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nnew\n");
    }

    #[test]
    fn append_to_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let sink = FileSink::new(tmp.path());

        let err = sink.append_line("x").unwrap_err();
        assert!(matches!(err, LogError::Io(_)));
        assert!(err.to_string().starts_with("IO error: "));
    }

    #[test]
    fn append_without_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let sink = FileSink::new(tmp.path().join("missing/hooks.log"));

        assert!(sink.append_line("x").is_err());
    }
}
