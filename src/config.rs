//! User configuration read from a TOML file.
//!
//! Every field has a default, so a missing file or an empty one is valid:
//!
//! ```toml
//! log_level = "debug"
//! log_file = "/tmp/athena-study.log"
//! move_interval_ms = 150
//! card_height = 5
//! progress_steps = 5
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{field} must be at least 1")]
    Invalid { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset. Default: `"info"`
    pub log_level: Option<String>,

    /// File that receives log output. Logging is off when unset.
    pub log_file: Option<PathBuf>,

    /// Minimum time between two feed moves while a key is held.
    pub move_interval_ms: u64,

    /// Rows taken by one feed card.
    pub card_height: u16,

    /// Dots in the result progress indicator.
    pub progress_steps: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            log_file: None,
            move_interval_ms: 150,
            card_height: 5,
            progress_steps: 5,
        }
    }
}

impl Config {
    /// Load from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn move_interval(&self) -> Duration {
        Duration::from_millis(self.move_interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.card_height == 0 {
            return Err(ConfigError::Invalid {
                field: "card_height",
            });
        }
        if self.progress_steps == 0 {
            return Err(ConfigError::Invalid {
                field: "progress_steps",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_no_path_gives_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.move_interval(), Duration::from_millis(150));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("card_height = 3\nlog_level = \"debug\"\n");
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(
            config,
            Config {
                log_level: Some("debug".to_string()),
                card_height: 3,
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_zero_card_height_is_rejected() {
        let file = write_config("card_height = 0\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Invalid {
                field: "card_height"
            })
        ));
    }

    #[test]
    fn test_bad_toml_is_a_parse_error() {
        let file = write_config("move_interval_ms = \"fast\"\n");
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }
}
