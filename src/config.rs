//! Configuration for the soundex tool
//!
//! Settings come from an optional `soundex.toml` file, then environment
//! overrides, then command line flags.
//!
//! ## Environment Variables
//!
//! - `SOUNDEX_SEED_POLICY` - `literal` or `require-alphabetic`
//! - `SOUNDEX_FORMAT` - `text` or `json`
//!
//! These can be set in a `.env` file in the config directory.

use serde::{Deserialize, Serialize};
use soundex_core::{Encoder, SeedPolicy};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "soundex.toml";

/// Environment variable names
pub const ENV_SEED_POLICY: &str = "SOUNDEX_SEED_POLICY";
pub const ENV_FORMAT: &str = "SOUNDEX_FORMAT";

/// How batch results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `name<TAB>code` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            other => Err(AppError::ConfigError(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// First-character policy for the encoder
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Batch output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Trim surrounding whitespace from each input line
    #[serde(default = "default_true")]
    pub trim: bool,
    /// Skip lines that are empty (after trimming)
    #[serde(default = "default_true")]
    pub skip_blank: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_policy: SeedPolicy::default(),
            format: OutputFormat::default(),
            trim: true,
            skip_blank: true,
        }
    }
}

impl Config {
    /// Load configuration from a directory
    ///
    /// Loads `.env` from the directory if present, reads `soundex.toml` if
    /// present (defaults otherwise) and applies environment overrides.
    pub fn load(dir: &Path) -> AppResult<Self> {
        let env_path = dir.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        }

        let config_path = dir.join(CONFIG_FILE_NAME);
        let mut config = if config_path.exists() {
            tracing::debug!("Reading config from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str::<Config>(&content)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(policy) = std::env::var(ENV_SEED_POLICY) {
            if !policy.is_empty() {
                match policy.parse() {
                    Ok(policy) => self.seed_policy = policy,
                    Err(e) => tracing::warn!("Ignoring {}: {}", ENV_SEED_POLICY, e),
                }
            }
        }

        if let Ok(format) = std::env::var(ENV_FORMAT) {
            if !format.is_empty() {
                match format.parse() {
                    Ok(format) => self.format = format,
                    Err(e) => tracing::warn!("Ignoring {}: {}", ENV_FORMAT, e),
                }
            }
        }
    }

    /// Encoder configured with this seed policy
    pub fn encoder(&self) -> Encoder {
        Encoder::new(self.seed_policy)
    }
}
