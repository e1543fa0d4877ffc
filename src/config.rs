use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Client credentials for a single OAuth provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthCredentials {
    pub key: String,
    pub secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hostname: String,
    pub port: u16,
    // Bind address, supplied by the caller rather than the config file.
    #[serde(skip)]
    pub host: String,
    pub database: String,
    #[serde(rename = "cookie-secret")]
    pub cookie_secret: String,
    pub auth: HashMap<String, AuthCredentials>,
}

impl Config {
    /// Reads `path` and deserializes its contents as JSON.
    ///
    /// I/O and parse failures are returned as-is; no context is attached and
    /// no field is validated beyond what deserialization enforces.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let bytes = fs::read(path)?;
        let config = serde_json::from_slice(&bytes)?;
        Ok(config)
    }
}
