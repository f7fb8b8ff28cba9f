//! Legacy persisted-state discard
//!
//! Earlier releases persisted the configuration between runs. That behavior
//! was removed on purpose: every start begins from the default constant, so
//! initialization actively deletes any settings file left behind. Nothing
//! here can fail the engine - errors are logged and swallowed.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::constants::storage;

/// Path of the settings file earlier releases wrote
pub fn legacy_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(storage::APP_DIR);
    path.push(storage::LEGACY_FILE);
    path
}

/// Remove any previously persisted settings file.
///
/// Called once at store initialization. A missing file is the normal case.
pub fn discard_legacy_config() {
    discard_at(&legacy_config_path());
}

fn discard_at(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => info!(path = %path.display(), "discarded persisted settings from a previous release"),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no persisted settings to discard");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "could not discard persisted settings"),
    }
}
