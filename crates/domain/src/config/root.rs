use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::pool::PoolConfig;
use super::upstream::UpstreamConfig;

/// Root configuration. Every section is optional in the TOML file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub pool: PoolConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub workers: Option<usize>,
}

impl Config {
    /// Load configuration from an optional TOML file and apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };

        if let Some(workers) = overrides.workers {
            config.pool.default_workers = workers;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool.default_workers == 0 {
            return Err(ConfigError::Validation(
                "number of workers must be a positive integer".to_string(),
            ));
        }
        if self.pool.output_queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "pool.output_queue_capacity must be greater than 0".to_string(),
            ));
        }
        if self.upstream.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "upstream.timeout_ms must be greater than 0".to_string(),
            ));
        }
        let url = self.upstream.url.as_str();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::Validation(format!(
                "upstream.url must start with http:// or https://: {}",
                url
            )));
        }
        Ok(())
    }
}
