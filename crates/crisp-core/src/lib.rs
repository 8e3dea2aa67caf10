//! Shared configuration for the Crisp Cleaning quote tooling.

pub mod app_config;
pub mod config;

use thiserror::Error;

pub use app_config::{AppConfig, DeviceCoordinates};
pub use config::{load_app_config_from_env, log_level_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
