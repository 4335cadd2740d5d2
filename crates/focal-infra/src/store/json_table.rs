//! A JSON array file read and rewritten wholesale on every access.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use focal_core::error::StoreError;

/// One on-disk table: a single JSON array of records, loaded in full on
/// every read and overwritten in full on every write. A missing file reads
/// as an empty table.
///
/// The mutex is held across the whole load-mutate-save cycle so concurrent
/// in-process writers serialize instead of silently dropping each other's
/// records. Writers in other processes are not protected.
pub struct JsonTable<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _record: std::marker::PhantomData<T>,
}

impl<T> JsonTable<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _record: std::marker::PhantomData,
        }
    }

    /// Parse the whole table, or an empty list if the file does not exist.
    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse(e.to_string()))
    }

    /// Load, apply `apply` to the record list, and write the result back,
    /// all under the table lock.
    pub async fn mutate<F, R>(&self, apply: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, StoreError> + Send,
        R: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;
        let out = apply(&mut records)?;
        self.save(&records).await?;
        Ok(out)
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec_pretty(records).map_err(|e| StoreError::Parse(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))
    }
}
