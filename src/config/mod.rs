//! Environment-backed configuration.
//!
//! All settings have defaults. Override with `VISMATCH_*` environment
//! variables. Animation pacing lives in
//! [`AnimationConfig`](crate::animation::AnimationConfig), which reads its
//! own `VISMATCH_*_MS` variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::scoring::MatchMethod;

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VISMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the dataset JSON. Default: `./data/words.json`.
    pub data_path: PathBuf,

    /// Match strategy applied to every row. Default: `maxavg`.
    pub match_method: MatchMethod,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./data/words.json"),
            match_method: MatchMethod::default(),
        }
    }
}

impl Config {
    const ENV_DATA_PATH: &'static str = "VISMATCH_DATA_PATH";
    const ENV_MATCH_METHOD: &'static str = "VISMATCH_MATCH_METHOD";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_path = env::var(Self::ENV_DATA_PATH)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let match_method = match env::var(Self::ENV_MATCH_METHOD) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidMatchMethod { value })?,
            Err(_) => defaults.match_method,
        };

        Ok(Self {
            data_path,
            match_method,
        })
    }

    /// Validates that the data path points at an existing file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.data_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.data_path.clone(),
            });
        }
        if !self.data_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.data_path.clone(),
            });
        }
        Ok(())
    }
}
