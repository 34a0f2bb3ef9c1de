use thiserror::Error;

/// Errors returned by the preference store and its backends.
///
/// An absent key is not an error; backends report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend could not read or write the key.
    #[error("storage backend failure for key {key}: {source}")]
    Backend {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored value exists but is not a valid document.
    #[error("stored value for key {key} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize value for key {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The file backend only stores keys made of `[A-Za-z0-9_-]`.
    #[error("unsupported storage key {key:?}")]
    InvalidKey { key: String },

    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },
}
