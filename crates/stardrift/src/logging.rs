//! File-based logging.
//!
//! The terminal is owned by the starfield while the app runs, so log output
//! goes to `stardrift.log` in the platform data directory instead of stderr.

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "stardrift=info,stardrift_background=info,stardrift_config=info";

/// Directory the log file is written to.
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "stardrift").map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// Install the global subscriber.
///
/// Returns the writer guard, which must stay alive for the lifetime of the
/// program so buffered lines get flushed. Returns `None` when no log
/// directory is available; the app then runs without logging.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: failed to create log directory {}: {err}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::never(&dir, "stardrift.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(guard)
}
