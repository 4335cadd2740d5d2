use async_trait::async_trait;

use crate::domain::{Post, User};
use crate::error::StoreError;

/// User table. Records are an unordered sequence keyed by email; the store
/// does not enforce uniqueness, so duplicate emails can coexist and lookups
/// return the first match (kept for parity, see DESIGN.md).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All user records in insertion order.
    async fn all(&self) -> Result<Vec<User>, StoreError>;

    /// Append a record unconditionally. No uniqueness check.
    async fn append(&self, user: User) -> Result<(), StoreError>;

    /// First record with a matching email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// First record matching both email and password exactly. Passwords are
    /// plain text by design; do not harden this comparison.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError>;

    /// Replace the first record whose email matches `user.email`.
    async fn update(&self, user: User) -> Result<(), StoreError>;
}

/// Post table.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts in insertion order.
    async fn all(&self) -> Result<Vec<Post>, StoreError>;

    /// Append a post.
    async fn append(&self, post: Post) -> Result<(), StoreError>;

    /// Posts owned by the given email, in insertion order.
    async fn by_user(&self, email: &str) -> Result<Vec<Post>, StoreError>;
}
