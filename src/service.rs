use std::path::Path;
use std::sync::Arc;

use crate::config::{AuthCredentials, Config, ConfigError};

pub trait ConfigService: Send + Sync {
    fn port(&self) -> u16;
    fn hostname(&self) -> &str;
    fn values(&self) -> &Config;
    fn provider(&self, name: &str) -> Option<&AuthCredentials>;
}

pub struct ConfigServiceImpl {
    config: Arc<Config>,
}

impl ConfigServiceImpl {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::from_config(Config::from_file(path)?))
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl ConfigService for ConfigServiceImpl {
    fn port(&self) -> u16 {
        self.config.port
    }

    fn hostname(&self) -> &str {
        &self.config.hostname
    }

    fn values(&self) -> &Config {
        &self.config
    }

    fn provider(&self, name: &str) -> Option<&AuthCredentials> {
        self.config.auth.get(name)
    }
}
