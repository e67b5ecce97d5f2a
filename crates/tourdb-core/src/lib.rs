mod app_config;
mod config;
mod places;

pub use app_config::{
    AppConfig, Environment, SearchConfig, DEFAULT_ENRICHMENT_TIMEOUT_MS, DEFAULT_PAGE_SIZE,
    DEFAULT_RADIUS_KM,
};
pub use config::load_app_config;
pub use places::{normalize_keyword, Coordinate, PlaceRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
    #[error("keyword must not be blank")]
    EmptyKeyword,
    #[error("keyword must not contain control characters")]
    ControlCharacterInKeyword,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
