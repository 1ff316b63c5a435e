use thiserror::Error;

/// Failure of the key-value backend itself
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage quota exceeded writing {key}: {size} bytes needed, {quota} allowed")]
    QuotaExceeded { key: String, size: usize, quota: usize },

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Error reported by a store mutation. The in-memory list is left untouched.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write bookmarks to storage: {0}")]
    StorageWrite(#[from] StorageError),

    #[error("Failed to serialize bookmarks: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No show id left: a stored show already uses the largest possible id")]
    IdsExhausted,
}

/// Why a stored value could not be used as a bookmark list.
///
/// Never surfaced by `initialize`, which recovers with the seed list.
#[derive(Error, Debug)]
pub enum PersistedDataError {
    #[error("stored value is not valid JSON: {0}")]
    Unparseable(serde_json::Error),

    #[error("stored value is a JSON {0}, expected an array")]
    NotASequence(&'static str),
}
