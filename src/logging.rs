//! Tracing subscriber setup
//!
//! CLI commands log to stderr. The interactive viewer owns the terminal, so it
//! logs to a file in the cache directory instead.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "LITMD_LOG";

/// Log file name inside [`log_dir`].
pub const LOG_FILE: &str = "litmd.log";

/// Default level for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// Log to stderr. Safe to call more than once.
pub fn init_stderr(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Directory holding the viewer's log file.
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("litmd")
}

/// Log to `<cache_dir>/litmd/litmd.log`.
///
/// Returns the writer guard; dropping it flushes pending lines. `None` when
/// the directory cannot be created or a subscriber is already installed.
pub fn init_file(verbosity: u8) -> Option<WorkerGuard> {
    let dir = log_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter(verbosity))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .ok()
        .map(|_| guard)
}
