//! Layered configuration: defaults → TOML file → `PIXDOC_` env → flags.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Environment variable prefix, e.g. `PIXDOC_LOG_LEVEL=debug`.
pub const ENV_PREFIX: &str = "PIXDOC_";

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive (e.g., "warn", "pixdoc_validator=trace")
    pub level: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact single-line output
    #[default]
    Compact,
    /// Human-readable multi-line output
    Pretty,
    /// Structured JSON output
    Json,
}

/// How command results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Values given on the command line; unset flags leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "LogOverrides::is_empty")]
    pub log: LogOverrides,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LogOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<LogFormat>,
}

impl LogOverrides {
    fn is_empty(&self) -> bool {
        self.level.is_none() && self.format.is_none()
    }
}

/// `$XDG_CONFIG_HOME/pixdoc/config.toml` or the platform equivalent.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pixdoc").join("config.toml"))
}

impl Config {
    /// Builds the provider stack.
    ///
    /// An explicit `file` must exist; the default location is optional.
    pub fn figment(file: Option<&Path>, overrides: &Overrides) -> Result<Figment, CliError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        match file {
            Some(path) if !path.is_file() => {
                return Err(CliError::ConfigNotFound(path.to_path_buf()));
            }
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                if let Some(path) = default_config_path() {
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        Ok(figment
            .merge(Env::prefixed(ENV_PREFIX).split("_"))
            .merge(Serialized::defaults(overrides)))
    }

    /// Loads the configuration from every layer.
    pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<Self, CliError> {
        let config: Config = Self::figment(file, overrides)?.extract()?;
        Ok(config)
    }
}
