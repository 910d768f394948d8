//! Persisted user preferences.
//!
//! A single key-value pair, `dark_mode = true|false`, kept in
//! `preferences.toml` next to the config file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::config::loader::config_dir;

pub const DARK_MODE_KEY: &str = "dark_mode";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Failed to write preferences '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Handle to the preference file. Cheap to clone; holds no open file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the configured override, or the default location.
    pub fn from_override(path: Option<PathBuf>) -> Self {
        Self::new(path.unwrap_or_else(Self::default_path))
    }

    pub fn default_path() -> PathBuf {
        config_dir().join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the theme flag. Anything other than a stored `true` reads as `false`.
    pub fn load_dark_mode(&self) -> bool {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return false,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Failed to read preferences");
                return false;
            }
        };

        let table: toml::Table = match toml::from_str(&content) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "Ignoring malformed preferences");
                return false;
            }
        };

        match table.get(DARK_MODE_KEY) {
            Some(toml::Value::Boolean(value)) => *value,
            Some(toml::Value::String(value)) => value == "true",
            _ => false,
        }
    }

    /// Write the theme flag.
    ///
    /// The file is held under an exclusive lock for the duration of the write
    /// and released on every exit path.
    pub fn save_dark_mode(&self, value: bool) -> Result<(), PreferenceError> {
        let io_err = |source: std::io::Error| PreferenceError::WriteError {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)
            .map_err(io_err)?;
        FileExt::lock_exclusive(&file).map_err(io_err)?;
        let mut file = scopeguard::guard(file, |file| {
            let _ = FileExt::unlock(&file);
        });

        file.set_len(0).map_err(io_err)?;
        file.write_all(format!("{DARK_MODE_KEY} = {value}\n").as_bytes())
            .map_err(io_err)?;
        file.sync_all().map_err(io_err)?;

        tracing::debug!(path = %self.path.display(), dark_mode = value, "Preferences saved");
        Ok(())
    }
}
