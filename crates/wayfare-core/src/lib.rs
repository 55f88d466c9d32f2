//! Shared domain types and configuration for the Wayfare workspace.

pub mod app_config;
pub mod config;
pub mod destinations;
pub mod trip;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use destinations::{load_destinations, DestinationCatalog, DestinationProfile};
pub use trip::{DayPlan, TripFormInput, TripRecord};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid trip request: {0}")]
    InvalidForm(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read destinations file {path}: {source}")]
    DestinationsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse destinations file: {0}")]
    DestinationsFileParse(#[from] serde_yaml::Error),

    #[error("destinations validation failed: {0}")]
    Validation(String),
}
