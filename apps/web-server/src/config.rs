//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use focal_infra::blob::AzureConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Cookie-session signing secret.
    pub secret_key: String,
    /// Directory holding `users.json` and `posts.json`.
    pub data_dir: PathBuf,
    pub azure: Option<AzureConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            secret_key: env::var("SECRET_KEY").unwrap_or_else(|_| "simplekey".to_string()),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            azure: Self::azure_from_env(),
        }
    }

    /// Azure settings, present only when all three variables are set.
    fn azure_from_env() -> Option<AzureConfig> {
        let account = env::var("AZURE_STORAGE_ACCOUNT_NAME").ok()?;
        let access_key = env::var("AZURE_STORAGE_ACCOUNT_KEY").ok()?;
        let container = env::var("AZURE_STORAGE_CONTAINER_NAME").ok()?;
        Some(AzureConfig {
            account,
            access_key,
            container,
        })
    }
}
