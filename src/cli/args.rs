//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Instagram profile downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "insta-downloader",
    version,
    about = "Download all posts from an Instagram profile",
    long_about = "A CLI tool to download every photo and video posted by an Instagram profile.\n\n\
                  Posts already on disk are skipped, so runs can be repeated to pick up new posts."
)]
pub struct Args {
    /// Profile to download posts from (prompted if omitted).
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Instagram username to log in with.
    #[arg(short, long, env = "INSTA_USERNAME")]
    pub username: Option<String>,

    /// Log in without asking.
    #[arg(long, conflicts_with = "anonymous")]
    pub login: bool,

    /// Download without logging in, without asking.
    #[arg(long)]
    pub anonymous: bool,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Also save post captions as text files.
    #[arg(long)]
    pub save_captions: bool,

    /// Hide skip messages and progress bars.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(profile) = self.profile {
            config.target.username = Some(profile);
        }

        if let Some(username) = self.username {
            config.account.username = Some(username);
        }

        if self.login {
            config.options.login = Some(true);
        } else if self.anonymous {
            config.options.login = Some(false);
        }

        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }

        // Boolean flags (only override if set to non-default)
        if self.save_captions {
            config.options.save_captions = true;
        }

        if self.quiet {
            config.options.show_skipped = false;
            config.options.show_progress = false;
        }
    }
}
