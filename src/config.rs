//! Runtime configuration.
//!
//! Read from the TOML file named by `FLY_FIGHTER_CONFIG`, else
//! `fly_fighter.toml` in the working directory when present, else defaults.
//! Every field is optional in the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_ENV: &str = "FLY_FIGHTER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "fly_fighter.toml";

const MIN_FPS: u32 = 10;
const MAX_FPS: u32 = 240;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame rate of the terminal loop. The simulation is tuned for 60.
    pub fps: u32,
    /// Ring the terminal bell whenever a laser fires.
    pub bell: bool,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config { fps: crate::entities::FRAMES_PER_SECOND, bell: false, seed: None }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl Config {
    /// Parse a TOML document, clamping out-of-range values.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(config.clamped())
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Resolve the config location from the environment. An explicitly named
    /// file must exist; the default file is optional.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from_file(Path::new(&path));
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.exists() {
            Self::load_from_file(default)
        } else {
            log::debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
            Ok(Self::default())
        }
    }

    pub fn clamped(self) -> Self {
        Config { fps: self.fps.clamp(MIN_FPS, MAX_FPS), ..self }
    }

    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(1)))
    }
}
