//! Suite configuration.
//!
//! Loads from an optional `gorest.toml` next to the manifest, overridden by
//! environment variables: `GOREST__*` keys map onto the structure, and the
//! conventional `GOREST_API_TOKEN` / `GOREST_BASE_URL` variables win over
//! everything. The token stays optional at load time; scenarios that need the
//! live API skip when it is absent.

use crate::error::{ConfigError, ConfigResult};
use config::{Config as Loader, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Default GoRest API root.
pub const DEFAULT_BASE_URL: &str = "https://gorest.co.in/public/v2";

/// Default configuration file checked when no explicit path is given.
const DEFAULT_CONFIG_PATH: &str = "gorest.toml";

/// Environment variables accepted for the bearer token, in precedence order.
const TOKEN_ENV_VARS: &[&str] = &["GOREST_API_TOKEN", "GOREST_TOKEN"];

/// Suite configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API root, e.g. `https://gorest.co.in/public/v2`
    pub base_url: String,

    /// Bearer token (prefer the GOREST_API_TOKEN environment variable)
    pub token: Option<SecretToken>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

impl Config {
    /// Load configuration from the default file location and environment.
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file path (must exist) or, when
    /// `None`, from `gorest.toml` if present, then apply environment
    /// overrides.
    pub fn load_from(config_path: Option<&str>) -> ConfigResult<Self> {
        let mut builder = Loader::builder();

        if let Some(path) = config_path {
            if !Path::new(path).exists() {
                return Err(ConfigError::Load(format!(
                    "configuration file not found: {path}"
                )));
            }
            builder = builder.add_source(File::new(path, FileFormat::Toml));
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            builder = builder.add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml));
        }

        // GOREST_BASE_URL, GOREST_TIMEOUT_SECS, ...
        builder = builder.add_source(
            Environment::with_prefix("GOREST")
                .separator("__")
                .try_parsing(true),
        );

        for env_var in TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                builder = builder
                    .set_override("token", token)
                    .map_err(|e| ConfigError::Load(e.to_string()))?;
                break;
            }
        }

        let config: Config = builder
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string (useful for testing).
    pub fn from_toml_str(toml_str: &str) -> ConfigResult<Self> {
        let config: Config = Loader::builder()
            .add_source(File::from_str(toml_str, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::Load(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Missing {
                field: "base_url".to_string(),
            });
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                message: format!(
                    "base_url must start with http:// or https://, got: {}",
                    self.base_url
                ),
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "timeout_secs must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Bearer token wrapper that redacts itself in logs.
///
/// `Debug` and `Display` print `[REDACTED]`; the value is only reachable
/// through [`SecretToken::expose`].
#[derive(Clone)]
pub struct SecretToken(String);

impl SecretToken {
    /// Wrap a token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Explicitly expose the token, e.g. when building the auth header.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<'de> Deserialize<'de> for SecretToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretToken::new)
    }
}
