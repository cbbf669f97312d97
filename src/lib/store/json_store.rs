use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use super::StoreError;

/// Accessor for one JSON document on disk. Every read parses the whole file
/// and every save replaces it; the file is the only authoritative state.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and parses the document. `Ok(None)` means the file does not
    /// exist yet; any other failure is `StoreError::Unavailable`.
    pub async fn load<T>(&self) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Unavailable(err.into())),
        };

        let document =
            serde_json::from_str(&raw).map_err(|err| StoreError::Unavailable(err.into()))?;
        Ok(Some(document))
    }

    /// Serializes the document and replaces the file. The write goes to a
    /// sibling temp file first and is renamed into place, so a concurrent
    /// reader never observes a half-written document.
    pub async fn save<T>(&self, document: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let raw = serde_json::to_vec(document).map_err(|err| StoreError::WriteFailed(err.into()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &raw)
            .await
            .map_err(|err| StoreError::WriteFailed(err.into()))?;
        if let Err(err) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(StoreError::WriteFailed(err.into()));
        }

        Ok(())
    }
}
