//! Change notifications for the config file.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use crate::{Config, ConfigError};

/// Minimum time between filesystem checks.
const CHECK_INTERVAL: Duration = Duration::from_millis(500);

/// Polls the config file's modification time and reloads it on change.
#[derive(Debug)]
pub struct ConfigWatcher {
    path: PathBuf,
    last_modified: Option<SystemTime>,
    last_check: Option<Instant>,
}

impl ConfigWatcher {
    /// Start watching `path`, treating its current state as already seen.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let last_modified = modified(&path);
        Self {
            path,
            last_modified,
            last_check: None,
        }
    }

    /// Reload the config if the file changed since the last check.
    ///
    /// Checks are throttled; calls in between return `None`. A deleted file
    /// counts as a change back to the defaults.
    pub fn poll(&mut self, now: Instant) -> Option<Result<Config, ConfigError>> {
        if let Some(last) = self.last_check
            && now.duration_since(last) < CHECK_INTERVAL
        {
            return None;
        }
        self.last_check = Some(now);
        self.check()
    }

    /// Unthrottled change check.
    pub fn check(&mut self) -> Option<Result<Config, ConfigError>> {
        let current = modified(&self.path);
        if current == self.last_modified {
            return None;
        }
        self.last_modified = current;
        tracing::debug!(path = %self.path.display(), "config file changed");
        Some(Config::load_from(&self.path))
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|meta| meta.modified()).ok()
}
