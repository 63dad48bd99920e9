//! Frontend configuration

use common::config::ServerConfig;
use config::{ConfigError, Environment};
use serde::Deserialize;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Backend API used when `BACKEND_URL` is not set
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8111";

/// Frontend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    /// Listener settings
    #[serde(flatten)]
    pub server: ServerConfig,
    /// Base URL of the backend API
    pub backend_url: String,
}

impl FrontendConfig {
    /// Create a new FrontendConfig from environment variables
    ///
    /// # Environment Variables
    /// - `HOST`: Interface to bind (default: "0.0.0.0")
    /// - `PORT`: Port to listen on (default: 3000)
    /// - `BACKEND_URL`: Backend API base URL (default: "http://localhost:8111")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    pub fn from_source(source: Environment) -> Result<Self, ConfigError> {
        common::config::builder(source, DEFAULT_PORT)?
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .build()?
            .try_deserialize()
    }
}
