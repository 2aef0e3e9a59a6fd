//! Configuration loading for degrees.
//!
//! Values are merged from several sources, later ones winning:
//! 1. Built-in defaults
//! 2. A TOML file (`degrees.toml` unless another path is given)
//! 3. Environment variables prefixed with `DEGREES_`
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `DEGREES_SOURCE__BASE_URL` or `DEGREES_SEARCH__MAX_DEGREES`.
//!
//! # Example
//!
//! ```rust,no_run
//! use degrees_core::config::DegreesConfig;
//!
//! let config = DegreesConfig::load()?;
//! println!("fetching from {}", config.source.base_url);
//! # Ok::<(), degrees_core::Error>(())
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "degrees.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "DEGREES_";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DegreesConfig {
    /// Remote data source settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote data source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL that record identifiers are appended to.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://data.moviebuff.com/".to_string(),
            timeout_secs: 30,
            user_agent: concat!("degrees/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// How the frontier treats an actor discovered again before expansion.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FrontierPolicy {
    /// Queue every discovery; duplicates are skipped when dequeued.
    #[default]
    AllowDuplicates,
    /// Queue an actor at most once.
    Deduplicate,
}

/// Search settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of levels to start (0 = unlimited).
    pub max_degrees: usize,
    /// Frontier queueing strategy.
    pub frontier_policy: FrontierPolicy,
}

impl SearchConfig {
    /// Returns the depth limit, if one is set.
    #[must_use]
    pub fn depth_limit(&self) -> Option<usize> {
        (self.max_degrees > 0).then_some(self.max_degrees)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl DegreesConfig {
    /// Loads configuration from `degrees.toml` (if present) and environment.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads configuration from the given TOML file and environment.
    ///
    /// A missing file is not an error; defaults and environment apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::extract_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Merges defaults, the given TOML file and environment without
    /// validating, so callers can apply further overrides first.
    pub fn extract_from(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::figment(path.as_ref()).extract()?)
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Checks values that deserialization alone cannot.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.source.base_url).map_err(|e| {
            Error::Config(format!(
                "source.base_url '{}' is not a valid URL: {e}",
                self.source.base_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "source.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.source.timeout_secs == 0 {
            return Err(Error::Config(
                "source.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
