use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_PER_PAGE;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Metadata API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API host without the version segment (default: "https://api.themoviedb.org").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Image CDN prefix (default: "https://image.tmdb.org/t/p").
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Environment variable holding the bearer token (default: "TMDB_TOKEN").
    #[serde(default = "default_token_env_var")]
    pub token_env_var: String,
    /// Language tag sent with detail requests (default: "en-US").
    #[serde(default = "default_language")]
    pub language: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Cards per list page (default: 12).
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PreferencesConfig {
    /// Override for the preference file location.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_token_env_var() -> String {
    "TMDB_TOKEN".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            token_env_var: default_token_env_var(),
            language: default_language(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
        }
    }
}
