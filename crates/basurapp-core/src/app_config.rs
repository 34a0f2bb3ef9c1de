use std::path::PathBuf;

use crate::geo::LngLat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Settings for the geocoding provider client.
#[derive(Clone)]
pub struct GeocoderSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub result_limit: u32,
    pub proximity: LngLat,
}

impl std::fmt::Debug for GeocoderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("result_limit", &self.result_limit)
            .field("proximity", &self.proximity)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub geocoder: GeocoderSettings,
    pub data_dir: PathBuf,
    pub reference_path: Option<PathBuf>,
}
