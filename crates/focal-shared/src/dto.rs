//! Data Transfer Objects - form bodies and page payloads.

use serde::{Deserialize, Serialize};

/// Login form body (`POST /`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Signup form body (`POST /signup`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
}

/// One post as shown on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub image_url: String,
    pub user: String,
    pub timestamp: String,
}

/// A user's public profile as shown on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

/// Home feed payload: every post, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPage {
    pub posts: Vec<PostView>,
}

/// Profile page payload: the current user and only their posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePage {
    pub user: UserView,
    pub posts: Vec<PostView>,
}

/// Payload for pages that carried only a template in the original
/// (login, signup, upload, settings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    pub page: String,
}

impl PageView {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }
}
