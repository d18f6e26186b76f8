//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Stdout carries command output only, so nothing here ever writes to it.

use crate::config::{PluginConfig, APP_NAME};
use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,pvc_selector_core=debug";

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// `RUST_LOG` if set, else the configured filter, else the built-in default.
fn env_filter(cfg: &PluginConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = cfg.log_filter.as_deref().unwrap_or(DEFAULT_FILTER);
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    })
}

/// Initialize structured logging to `~/.local/state/pvc-remove-selector/pvc-remove-selector.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging(cfg: &PluginConfig) -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    let log_dir = xdg_dirs.get_state_home().join(APP_NAME);

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join(format!("{APP_NAME}.log"));

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = FileOrStderr;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(FileOrStderr::File)
                .unwrap_or(FileOrStderr::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only. Use when file logging is disabled or init_logging() fails.
pub fn init_logging_stderr(cfg: &PluginConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_is_accepted() {
        let cfg = PluginConfig {
            log_filter: Some("warn,pvc_selector_core=trace".into()),
            ..PluginConfig::default()
        };
        // RUST_LOG may be set in the test environment; either way a filter is built.
        let filter = env_filter(&cfg);
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn stderr_init_is_idempotent() {
        let cfg = PluginConfig::default();
        init_logging_stderr(&cfg);
        init_logging_stderr(&cfg);
    }
}
