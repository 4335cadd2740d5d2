use std::path::PathBuf;

use async_trait::async_trait;

use focal_core::domain::User;
use focal_core::error::StoreError;
use focal_core::ports::UserStore;

use super::JsonTable;

/// User table backed by a single JSON array file (`users.json` by
/// convention).
pub struct JsonUserStore {
    table: JsonTable<User>,
}

impl JsonUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: JsonTable::new(path),
        }
    }
}

#[async_trait]
impl UserStore for JsonUserStore {
    async fn all(&self) -> Result<Vec<User>, StoreError> {
        self.table.load().await
    }

    async fn append(&self, user: User) -> Result<(), StoreError> {
        if user.email.is_empty() {
            return Err(StoreError::Validation(
                "user record needs an email".to_string(),
            ));
        }
        self.table
            .mutate(|users| {
                users.push(user);
                Ok(())
            })
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.table.load().await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let users = self.table.load().await?;
        Ok(users
            .into_iter()
            .find(|u| u.email == email && u.password == password))
    }

    async fn update(&self, user: User) -> Result<(), StoreError> {
        self.table
            .mutate(|users| {
                let slot = users
                    .iter_mut()
                    .find(|u| u.email == user.email)
                    .ok_or(StoreError::NotFound)?;
                *slot = user;
                Ok(())
            })
            .await
    }
}
