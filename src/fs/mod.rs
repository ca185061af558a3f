//! Filesystem module.
//!
//! Provides:
//! - Profile directory management
//! - Artifact existence checks and filename handling

pub mod naming;
pub mod paths;

pub use naming::{artifact_exists, partial_path, sanitize_path_component};
pub use paths::{ensure_dir, get_profile_folder};
