//! File logging for the TUI process.
//!
//! Stdout belongs to the terminal UI, so nothing is logged unless
//! `MOVIEBASE_LOG` names a file prefix.

use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file prefix.
pub const LOG_ENV_VAR: &str = "MOVIEBASE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber if logging was requested.
///
/// Returns the file actually written to. The filter comes from `RUST_LOG`
/// and defaults to `info`.
pub fn init_tracing() -> Option<PathBuf> {
    let prefix = std::env::var_os(LOG_ENV_VAR).filter(|value| !value.is_empty())?;
    let path = log_file_path(Path::new(&prefix), SystemTime::now(), std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("moviebase: cannot create log file {}: {err}", path.display());
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Some(path)
}

/// `{prefix}.{unix_seconds}.{pid}`, unique per running instance.
fn log_file_path(prefix: &Path, now: SystemTime, pid: u32) -> PathBuf {
    let seconds = now
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let mut name = OsString::from(prefix.as_os_str());
    name.push(format!(".{seconds}.{pid}"));
    PathBuf::from(name)
}
