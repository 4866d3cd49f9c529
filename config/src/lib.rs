//! Configuration for Glidepath: where the projection service lives and
//! how long to wait for it.
//!
//! Sources, in increasing precedence:
//!
//! 1. Built-in defaults (a local development service)
//! 2. `~/.glidepath/config.toml`
//! 3. `GLIDEPATH_ENDPOINT` / `GLIDEPATH_TIMEOUT_SECS` environment variables
//!
//! A missing file means defaults; a present-but-malformed file is a
//! startup error rather than a silent fallback.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Default endpoint of the projection service's submit route.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/submit-form";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid endpoint {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        source: url::ParseError,
    },

    #[error("invalid timeout {value:?}: must be a positive number of seconds")]
    InvalidTimeout { value: String },
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub timeout: Duration,
}

/// On-disk shape of `config.toml`. All keys optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    endpoint: Option<String>,
    timeout_secs: Option<u64>,
}

/// Path of the config file, if a home directory exists.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".glidepath").join("config.toml"))
}

impl Config {
    /// Load from the default file location and process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let raw = match config_path() {
            Some(path) if path.exists() => read_file(&path)?,
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                RawConfig::default()
            }
            None => RawConfig::default(),
        };
        Self::resolve(raw, |key| std::env::var(key).ok())
    }

    /// Load from an explicit file, still honoring env overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = read_file(path)?;
        Self::resolve(raw, |key| std::env::var(key).ok())
    }

    fn resolve(
        raw: RawConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint_text = env("GLIDEPATH_ENDPOINT")
            .or(raw.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint =
            Url::parse(&endpoint_text).map_err(|source| ConfigError::InvalidEndpoint {
                value: endpoint_text,
                source,
            })?;

        let timeout_secs = match env("GLIDEPATH_TIMEOUT_SECS") {
            Some(text) => text
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout { value: text })?,
            None => raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn read_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
