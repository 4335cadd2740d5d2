use serde::{Deserialize, Serialize};

/// User record. The email doubles as the session identity; the password is
/// stored and compared in plain text for parity with the original flat-file
/// tables (a known-insecure choice, see DESIGN.md).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: Option<Profile>,
}

/// Optional profile fields. Any subset may be absent; absent fields are
/// omitted from the persisted JSON record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
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

impl User {
    /// Create a bare signup record with no profile yet.
    pub fn new(email: String, password: String) -> Self {
        Self {
            email,
            password,
            profile: None,
        }
    }
}
