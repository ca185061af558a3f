//! Filename checks and manipulation.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Extensions that mark a post as already downloaded.
pub const ARTIFACT_EXTENSIONS: [&str; 2] = ["jpg", "mp4"];

/// Suffix of files still being written.
const PARTIAL_SUFFIX: &str = "part";

/// Check whether a post with the given stem already has an artifact in `dir`.
///
/// Only existence is checked, never content.
pub fn artifact_exists(dir: &Path, stem: &str) -> bool {
    ARTIFACT_EXTENSIONS
        .iter()
        .any(|ext| dir.join(format!("{}.{}", stem, ext)).exists())
}

/// Path of the temporary file a download is streamed into before rename.
pub fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(PARTIAL_SUFFIX);
    path.with_file_name(name)
}

/// Sanitize a path component (folder or file name).
///
/// Path separators and characters invalid on common filesystems are replaced;
/// traversal patterns and null bytes are rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
