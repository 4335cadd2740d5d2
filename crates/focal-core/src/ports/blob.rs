//! Blob-store port.

use async_trait::async_trait;

/// Remote object store holding encoded images.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload JPEG bytes under `name`, overwriting any name collision, and
    /// return the public URL the blob is reachable at. Success is assumed
    /// when the call does not error; nothing re-checks the store.
    async fn put_jpeg(&self, name: &str, data: Vec<u8>) -> Result<String, BlobError>;
}

/// Blob-store errors.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("Blob upload failed: {0}")]
    Upload(String),
}
