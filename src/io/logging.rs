use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Error type for log file setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: InitError,
    },
}

/// Default log file: `$TMPDIR/todolist.log`
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("todolist.log")
}

/// Initialize file-based logging.
///
/// Logs never go to stdout: the TUI owns the terminal and `replay` writes
/// JSON there. `RUST_LOG` overrides `level`. The returned guard must be held
/// until exit so buffered entries are flushed. Yields `None` when the path
/// has no usable file name or a subscriber is already installed, and an
/// error when the log file cannot be created.
pub fn init_logging(level: &str, file_path: Option<&Path>) -> Result<Option<WorkerGuard>, LogError> {
    let default_path = default_log_path();
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let Some(file_name) = log_path.file_name().and_then(|n| n.to_str()) else {
        return Ok(None);
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)
        .map_err(|source| LogError::Open {
            path: log_path.to_path_buf(),
            source,
        })?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A global subscriber may already be installed (e.g. by a test harness).
    let installed = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .try_init()
        .is_ok();

    Ok(installed.then_some(guard))
}
