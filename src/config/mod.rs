//! Configuration, credentials and persisted preferences.

mod credentials;
mod loader;
mod preferences;
mod types;

pub use credentials::{resolve_token, SecureString};
pub use loader::{config_dir, ConfigError};
pub use preferences::{PreferenceError, PreferenceStore, DARK_MODE_KEY};
pub use types::{ApiConfig, CatalogConfig, Config, PreferencesConfig};
