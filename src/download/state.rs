//! Download state tracking.

use std::path::PathBuf;

/// Per-profile download state.
///
/// Counts are only logged; the user-facing summary line does not depend on
/// them.
#[derive(Debug, Default)]
pub struct DownloadState {
    pub profile_name: String,
    pub base_path: PathBuf,

    pub downloaded: u64,
    pub skipped: u64,
    pub unavailable: u64,
    pub failed: u64,
}

impl DownloadState {
    /// Create a new download state for a profile.
    pub fn new(profile_name: String, base_path: PathBuf) -> Self {
        Self {
            profile_name,
            base_path,
            ..Default::default()
        }
    }

    pub fn increment_downloaded(&mut self) {
        self.downloaded += 1;
    }

    pub fn increment_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn increment_unavailable(&mut self) {
        self.unavailable += 1;
    }

    pub fn increment_failed(&mut self) {
        self.failed += 1;
    }

    /// Number of posts the feed yielded.
    pub fn total_seen(&self) -> u64 {
        self.downloaded + self.skipped + self.unavailable + self.failed
    }
}
