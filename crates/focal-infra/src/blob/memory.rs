//! In-memory blob store - used as fallback when Azure is not configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use focal_core::ports::{BlobError, BlobStore};

/// Blob store keeping uploads in a HashMap behind an async RwLock.
///
/// This is the fallback implementation when the Azure environment variables
/// are unset, and what handler tests run against. Data is lost on process
/// restart.
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Stored bytes for `name`, if any.
    pub async fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.blobs.read().await.get(name).cloned()
    }

    /// Number of blobs held.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.blobs.read().await.is_empty()
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put_jpeg(&self, name: &str, data: Vec<u8>) -> Result<String, BlobError> {
        let mut blobs = self.blobs.write().await;
        blobs.insert(name.to_string(), data);
        Ok(format!("https://blobs.invalid/dev/{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_overwrites_and_returns_url() {
        let store = InMemoryBlobStore::new();

        let url = store.put_jpeg("a.jpg", vec![1]).await.unwrap();
        assert_eq!(url, "https://blobs.invalid/dev/a.jpg");

        store.put_jpeg("a.jpg", vec![2, 3]).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("a.jpg").await, Some(vec![2, 3]));
    }
}
