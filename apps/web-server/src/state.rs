//! Application state - shared across all handlers.

use std::sync::Arc;

use focal_core::ports::{BlobStore, ImageNormalizer, PostStore, UserStore};
use focal_infra::blob::{AzureBlobStore, InMemoryBlobStore};
use focal_infra::image::JpegNormalizer;
use focal_infra::store::{JsonPostStore, JsonUserStore};

use crate::config::AppConfig;

/// Shared application state. Every collaborator sits behind a port trait so
/// handlers never touch files, the image codec, or the blob client
/// directly.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub normalizer: Arc<dyn ImageNormalizer>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Self {
        let users = Arc::new(JsonUserStore::new(config.data_dir.join("users.json")));
        let posts = Arc::new(JsonPostStore::new(config.data_dir.join("posts.json")));

        let blobs: Arc<dyn BlobStore> = match &config.azure {
            Some(azure) => Arc::new(AzureBlobStore::new(azure.clone())),
            None => {
                tracing::warn!(
                    "Azure storage not configured - keeping uploads in memory (lost on restart)"
                );
                Arc::new(InMemoryBlobStore::new())
            }
        };

        tracing::info!("Application state initialized");

        Self {
            users,
            posts,
            blobs,
            normalizer: Arc::new(JpegNormalizer::new()),
        }
    }
}
