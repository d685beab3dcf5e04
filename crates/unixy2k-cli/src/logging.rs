//! Tracing subscriber setup
//!
//! The full-screen view owns the terminal, so its logs never go to stderr:
//! they go to a file when one is given and are dropped otherwise.

use crate::{CliError, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    /// Pick the target for a command. `full_screen` commands never log to
    /// stderr.
    pub fn for_command(full_screen: bool, log_file: Option<&Path>) -> Self {
        match (log_file, full_screen) {
            (Some(path), _) => Self::File(path.to_path_buf()),
            (None, true) => Self::Discard,
            (None, false) => Self::Stderr,
        }
    }

    fn make_writer(&self) -> Result<BoxMakeWriter> {
        Ok(match self {
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::Discard => BoxMakeWriter::new(std::io::sink),
            Self::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        CliError::FileSystem(format!(
                            "Failed to open log file {}: {e}",
                            path.display()
                        ))
                    })?;
                BoxMakeWriter::new(Mutex::new(file))
            }
        })
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool, target: &LogTarget) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(target.make_writer()?)
        .try_init()
        .map_err(|e| CliError::Configuration(format!("Failed to install logger: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn test_full_screen_never_logs_to_stderr() {
        assert_eq!(LogTarget::for_command(true, None), LogTarget::Discard);
        assert_eq!(LogTarget::for_command(false, None), LogTarget::Stderr);

        let path = Path::new("countdown.log");
        assert_eq!(
            LogTarget::for_command(true, Some(path)),
            LogTarget::File(path.to_path_buf())
        );
    }

    #[test]
    fn test_file_target_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countdown.log");
        let target = LogTarget::File(path.clone());

        let writer = target.make_writer().unwrap();
        writer.make_writer().write_all(b"first\n").unwrap();
        let writer = target.make_writer().unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_unopenable_log_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let target = LogTarget::File(dir.path().join("missing").join("countdown.log"));
        let err = target.make_writer().unwrap_err();
        assert!(matches!(err, CliError::FileSystem(_)));
    }
}
