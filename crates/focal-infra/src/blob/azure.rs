//! Azure Blob Storage client.

use async_trait::async_trait;
use azure_storage::StorageCredentials;
use azure_storage_blobs::prelude::*;

use focal_core::ports::{BlobError, BlobStore};

/// Azure storage settings, all supplied via process environment.
#[derive(Debug, Clone)]
pub struct AzureConfig {
    pub account: String,
    pub access_key: String,
    pub container: String,
}

/// Blob store backed by one Azure container. Blobs are uploaded with
/// overwrite semantics and addressed afterwards by a templated public URL;
/// the store is never queried for a canonical one.
pub struct AzureBlobStore {
    container: ContainerClient,
    account: String,
    container_name: String,
}

impl AzureBlobStore {
    pub fn new(config: AzureConfig) -> Self {
        let credentials =
            StorageCredentials::access_key(config.account.clone(), config.access_key);
        let container = BlobServiceClient::new(config.account.clone(), credentials)
            .container_client(config.container.clone());
        Self {
            container,
            account: config.account,
            container_name: config.container,
        }
    }

    fn public_url(&self, name: &str) -> String {
        format!(
            "https://{}.blob.core.windows.net/{}/{}",
            self.account, self.container_name, name
        )
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    async fn put_jpeg(&self, name: &str, data: Vec<u8>) -> Result<String, BlobError> {
        self.container
            .blob_client(name)
            .put_block_blob(data)
            .content_type("image/jpeg")
            .await
            .map_err(|e| BlobError::Upload(e.to_string()))?;

        tracing::debug!(blob = name, "uploaded blob");
        Ok(self.public_url(name))
    }
}
