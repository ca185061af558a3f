//! The remote service seam.
//!
//! Everything the downloader needs from Instagram goes through
//! [`MediaService`], so the HTTP client can be swapped for a mock in tests.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::media::Post;

/// A resolved profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_private: bool,
    pub followed_by_viewer: bool,
    pub post_count: Option<u64>,
}

/// One page of a profile's post feed.
#[derive(Debug, Default)]
pub struct PostPage {
    pub posts: Vec<Post>,
    /// Cursor for the following page; `None` when this is the last page.
    pub next_cursor: Option<String>,
}

/// Operations provided by the remote service.
#[async_trait]
pub trait MediaService: Send + Sync {
    /// Authenticate the client.
    async fn login(&mut self, username: &str, password: &str) -> Result<()>;

    /// Resolve a username to a profile.
    async fn resolve_profile(&self, username: &str) -> Result<Profile>;

    /// Fetch one page of posts. `cursor` is `None` for the first page.
    async fn fetch_posts(&self, profile: &Profile, cursor: Option<&str>) -> Result<PostPage>;

    /// Download every media node of a post into `target_dir`.
    async fn download_post(&self, post: &Post, target_dir: &Path) -> Result<()>;
}
