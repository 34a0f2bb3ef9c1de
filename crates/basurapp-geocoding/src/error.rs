use thiserror::Error;

/// Errors returned by the MapTiler client's fallible layer.
///
/// The [`crate::Geocoder`] implementation folds all of these into an invalid
/// result; they only surface to callers of [`crate::MapTilerClient::search`]
/// and [`crate::MapTilerClient::reverse`].
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {path}")]
    UnexpectedStatus { status: u16, path: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid geocoder base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("MAPTILER_API_KEY is not configured")]
    MissingApiKey,
}
