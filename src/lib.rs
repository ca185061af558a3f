//! Insta Downloader - download every post of an Instagram profile
//!
//! This library provides functionality for downloading the posts of an
//! Instagram profile to local disk.
//!
//! # Features
//!
//! - Anonymous or logged-in sessions
//! - Lazy, paged iteration over a profile feed
//! - Images, videos and carousel posts
//! - Skips posts already on disk, so runs can be repeated
//! - Per-post failures (404/410 and others) never abort the run
//!
//! # Example
//!
//! ```no_run
//! use insta_downloader::{cli::TermPrompt, run_interactive, Config, InstagramApi};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.target.username = Some("natgeo".into());
//!     config.options.login = Some(false);
//!
//!     let api = InstagramApi::new(&config)?;
//!     run_interactive(api, &TermPrompt::new(), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod runner;
pub mod session;

// Re-exports for convenience
pub use api::{InstagramApi, MediaService, Profile};
pub use config::Config;
pub use download::{download_profile_posts, DownloadState, PostIterator};
pub use error::{Error, Result};
pub use media::{MediaKind, Post};
pub use runner::{run_interactive, RunOutcome};
pub use session::Session;
