use std::path::PathBuf;

use async_trait::async_trait;

use focal_core::domain::Post;
use focal_core::error::StoreError;
use focal_core::ports::PostStore;

use super::JsonTable;

/// Post table backed by a single JSON array file (`posts.json` by
/// convention).
pub struct JsonPostStore {
    table: JsonTable<Post>,
}

impl JsonPostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: JsonTable::new(path),
        }
    }
}

#[async_trait]
impl PostStore for JsonPostStore {
    async fn all(&self) -> Result<Vec<Post>, StoreError> {
        self.table.load().await
    }

    async fn append(&self, post: Post) -> Result<(), StoreError> {
        if post.image_url.is_empty() || post.user.is_empty() {
            return Err(StoreError::Validation(
                "post record needs an image URL and an owner".to_string(),
            ));
        }
        self.table
            .mutate(|posts| {
                posts.push(post);
                Ok(())
            })
            .await
    }

    async fn by_user(&self, email: &str) -> Result<Vec<Post>, StoreError> {
        let posts = self.table.load().await?;
        Ok(posts.into_iter().filter(|p| p.user == email).collect())
    }
}
