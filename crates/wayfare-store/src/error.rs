use thiserror::Error;

/// Failures from the key-value backend or from encoding the history blob.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected a read, write or delete.
    #[error("persistence error for key {key}: {source}")]
    Persistence {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize trip history: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid storage key \"{0}\": only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidKey(String),

    /// The backend cannot be used at all (quota exhausted, disabled, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
