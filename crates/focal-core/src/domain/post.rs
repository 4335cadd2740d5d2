use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Post record - one uploaded photo on the feed. Posts carry no id of their
/// own; position in the table is the only ordering the store keeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub image_url: String,
    /// Owning user's email.
    pub user: String,
    /// RFC 3339 UTC creation time. Lexicographic order matches
    /// chronological order, which the feed relies on.
    pub timestamp: String,
}

impl Post {
    /// Create a new post stamped with the current time.
    pub fn new(image_url: String, user: String) -> Self {
        Self {
            image_url,
            user,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
