//! Configuration for an auth-enabled web service, kept as its own crate so
//! downstream users can reuse config parsing without pulling in the server.
//!
//! Loads a JSON config file into [`Config`] (hostname, port, database,
//! cookie secret, per-provider OAuth credentials) and declares
//! [`ProviderProducer`], the contract for turning those credentials into
//! authentication-provider instances.

pub mod config;
pub mod provider;
pub mod service;

pub use config::{AuthCredentials, Config, ConfigError};
pub use provider::ProviderProducer;
pub use service::{ConfigService, ConfigServiceImpl};
