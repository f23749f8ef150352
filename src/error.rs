//! Storage error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! The typed store API collapses missing and corrupt data into empty
//! results. These variants exist so the raw layer (`Store::read_json`,
//! `Store::verify`) and the write paths can still tell the cases apart.

/// Error returned by key-value backends and the raw store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage is reachable (e.g. `localStorage` disabled by the browser).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// The backend refused a read.
    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },
    /// The backend refused a write (quota exceeded, private mode, ...).
    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
    /// A stored value exists but does not decode as the expected type.
    #[error("corrupt data under {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A value could not be serialized for storage.
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Short machine-readable code, for logs and UI diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "E_STORAGE_UNAVAILABLE",
            Self::Read { .. } => "E_STORAGE_READ",
            Self::Write { .. } => "E_STORAGE_WRITE",
            Self::Corrupt { .. } => "E_STORAGE_CORRUPT",
            Self::Encode { .. } => "E_STORAGE_ENCODE",
        }
    }
}
