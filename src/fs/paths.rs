//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Get the folder a profile's posts are downloaded into.
pub fn get_profile_folder(config: &Config, username: &str) -> Result<PathBuf> {
    let folder = sanitize_path_component(username)?;
    Ok(config.download_directory().join(folder))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
