use oddsmith_core::CoreError;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failure at '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt store data: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
