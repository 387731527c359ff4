pub mod app_config;
pub mod config;
pub mod events;

pub use app_config::{AppConfig, DEFAULT_LOOKAHEAD_DAYS, DEFAULT_REGIONS};
pub use config::{load_app_config, load_app_config_from_env};
pub use events::{FailedPayload, GeneratedPayload, NormalizedEvent, ResultPayload};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
