//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Authentication and token configuration
//! - `environment` - Environment detection and logging configuration
//! - `validation` - Input limits for names, emails, passwords and amounts

pub mod auth;
pub mod environment;
pub mod validation;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use validation::ValidationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Input validation limits
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            logging: LoggingConfig::default(),
            auth: AuthConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from the process environment.
    ///
    /// Only values with an environment-variable override are read here
    /// (`ENVIRONMENT`, `JWT_SECRET`); everything else starts from defaults
    /// and is expected to be overridden by the host's configuration file.
    pub fn from_env() -> Self {
        let mut config = Self {
            environment: Environment::from_env(),
            ..Self::default()
        };

        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.auth.jwt.secret = secret;
        }

        config
    }
}
