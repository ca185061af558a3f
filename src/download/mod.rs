//! Download module for profile posts.
//!
//! This module provides:
//! - Lazy post iteration over a profile feed
//! - The per-profile download loop with skip and failure handling
//! - Download state tracking
//! - Media file writing

pub mod media;
pub mod posts;
pub mod profile;
pub mod state;

pub use media::{save_caption, save_response};
pub use posts::PostIterator;
pub use profile::download_profile_posts;
pub use state::DownloadState;
