pub mod json_store;

use thiserror::Error;

/// Failure modes of the storage document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document exists but could not be read or was not valid JSON.
    #[error("data store unavailable: {0}")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The replacement document could not be written out.
    #[error("error writing to data store: {0}")]
    WriteFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}
