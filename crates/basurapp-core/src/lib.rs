pub mod app_config;
pub mod config;
pub mod geo;
pub mod reference;
pub mod result;

pub use app_config::{AppConfig, Environment, GeocoderSettings};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{BoundingRegion, LngLat, ParseLngLatError};
pub use reference::{builtin_reference_addresses, load_reference_addresses, ReferenceAddress};
pub use result::GeocodingResult;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read reference addresses file {path}: {source}")]
    ReferenceFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse reference addresses file: {0}")]
    ReferenceFileParse(#[from] serde_yaml::Error),

    #[error("reference address validation failed: {0}")]
    Validation(String),
}
