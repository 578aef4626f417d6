//! Configuration for the stardrift starfield.
//!
//! Settings live in a TOML file under the platform config directory. Every
//! field is optional; a missing file yields the defaults.

mod watcher;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use stardrift_core::{MotionLabels, Rgb};

pub use watcher::ConfigWatcher;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "STARDRIFT_CONFIG";

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of stars generated on every resize.
    pub star_count: usize,
    /// Supersampling factor for the backing canvas (capped at 2).
    pub pixel_ratio: f32,
    /// Delay between animation frames in milliseconds.
    pub frame_interval_ms: u64,
    /// System-level reduced-motion preference.
    pub reduced_motion: bool,
    /// Whether the motion toggle is available.
    pub show_toggle: bool,
    /// Backdrop the transparent canvas is composited over.
    pub backdrop: [u8; 3],
    pub labels: MotionLabels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_count: 70,
            pixel_ratio: 1.0,
            frame_interval_ms: 16,
            reduced_motion: false,
            show_toggle: true,
            backdrop: [6, 8, 22],
            labels: MotionLabels::default(),
        }
    }
}

impl Config {
    /// Default location of the config file, honouring [`CONFIG_ENV`].
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "stardrift").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn backdrop(&self) -> Rgb {
        Rgb::from(self.backdrop)
    }
}
