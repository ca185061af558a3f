//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Login account configuration. The password is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Instagram username to log in with (prompted when absent).
    #[serde(default)]
    pub username: Option<String>,

    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Profile targeting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Profile to download posts from (prompted when absent).
    #[serde(default)]
    pub username: Option<String>,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Whether to log in. `None` means ask interactively.
    #[serde(default)]
    pub login: Option<bool>,

    /// Whether to write post captions next to the media.
    #[serde(default)]
    pub save_captions: bool,

    /// Whether to print a line for every already-downloaded post.
    #[serde(default = "default_true")]
    pub show_skipped: bool,

    /// Whether to show progress bars for large downloads.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Lower bound of the random delay between feed pages.
    #[serde(default = "default_page_delay_min")]
    pub page_delay_min_ms: u64,

    /// Upper bound of the random delay between feed pages.
    #[serde(default = "default_page_delay_max")]
    pub page_delay_max_ms: u64,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            login: None,
            save_captions: false,
            show_skipped: true,
            show_progress: true,
            page_delay_min_ms: default_page_delay_min(),
            page_delay_max_ms: default_page_delay_max(),
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            username: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_delay_min() -> u64 {
    1000
}

fn default_page_delay_max() -> u64 {
    3000
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[account]
username = "me.myself"

[target]
username = "natgeo"

[options]
download_directory = "/data/insta"
login = true
save_captions = true
page_delay_min_ms = 10
page_delay_max_ms = 20
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.account.username.as_deref(), Some("me.myself"));
        assert_eq!(config.target.username.as_deref(), Some("natgeo"));
        assert_eq!(config.options.login, Some(true));
        assert!(config.options.save_captions);
        assert!(config.options.show_skipped);
        assert_eq!(config.options.page_delay_max_ms, 20);
        assert_eq!(config.download_directory(), PathBuf::from("/data/insta"));
        assert!(!config.account.user_agent.is_empty());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load(file.path()).unwrap();

        assert!(config.target.username.is_none());
        assert!(config.options.login.is_none());
        assert_eq!(config.options.page_delay_min_ms, 1000);
        assert_eq!(config.options.page_delay_max_ms, 3000);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[options\nlogin = ").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }
}
