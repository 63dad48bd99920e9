//! Configuration loading shared by the services
//!
//! Settings are read from environment variables through the `config` crate
//! and deserialized into typed structs. Each service layers its own
//! defaults on top of [`builder`].

use config::{Config, ConfigBuilder, ConfigError, Environment, builder::DefaultState};
use serde::Deserialize;

/// Host every service binds to unless `HOST` is set
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Start a configuration builder with the listener defaults applied
///
/// # Environment Variables
/// - `HOST`: Interface to bind (default: "0.0.0.0")
/// - `PORT`: Port to listen on (default: `default_port`)
pub fn builder(
    source: Environment,
    default_port: u16,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", i64::from(default_port))?
        .add_source(source.try_parsing(true)))
}

/// Listener configuration for a single service
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    pub fn from_env(default_port: u16) -> Result<Self, ConfigError> {
        Self::from_source(Environment::default(), default_port)
    }

    /// Create a new ServerConfig from an explicit environment source
    pub fn from_source(source: Environment, default_port: u16) -> Result<Self, ConfigError> {
        builder(source, default_port)?.build()?.try_deserialize()
    }

    /// Address suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
