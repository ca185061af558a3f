//! Error types for the insta-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Login errors
    #[error("Invalid Instagram username or password.")]
    BadCredentials,

    #[error("Two-factor authentication is required.")]
    TwoFactorRequired,

    #[error("Invalid argument provided: {0}")]
    InvalidArgument(String),

    #[error("Login failed: {0}")]
    Login(String),

    // Profile errors
    #[error("The profile '{0}' does not exist.")]
    ProfileNotExists(String),

    #[error("The profile '{0}' is private and requires following.")]
    PrivateProfileNotFollowed(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP {status} when accessing {url}")]
    Status { status: u16, url: String },

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error ends the run during login.
    pub fn is_login_failure(&self) -> bool {
        matches!(
            self,
            Error::BadCredentials
                | Error::TwoFactorRequired
                | Error::InvalidArgument(_)
                | Error::Login(_)
        )
    }

    /// Whether a post download failed because the media is gone (404/410).
    ///
    /// Structured HTTP statuses are matched directly; any other error falls
    /// back to looking for "404" or "410" in its message.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Error::Status { status, .. } => matches!(status, 404 | 410),
            Error::Http(e) => match e.status() {
                Some(status) => matches!(status.as_u16(), 404 | 410),
                None => message_mentions_gone(&e.to_string()),
            },
            other => message_mentions_gone(&other.to_string()),
        }
    }
}

fn message_mentions_gone(message: &str) -> bool {
    message.contains("404") || message.contains("410")
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const LOGIN_FAILED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
