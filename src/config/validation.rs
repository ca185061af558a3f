//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Maximum Instagram username length.
const MAX_USERNAME_LENGTH: usize = 30;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_user_agent(&config.account.user_agent)?;
    validate_page_delay(
        config.options.page_delay_min_ms,
        config.options.page_delay_max_ms,
    )?;

    if let Some(target) = &config.target.username {
        validate_profile_name(target)?;
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate the feed page delay range.
pub fn validate_page_delay(min_ms: u64, max_ms: u64) -> Result<()> {
    if min_ms > max_ms {
        return Err(Error::ConfigValidation {
            field: "page_delay_min_ms".to_string(),
            message: format!(
                "Minimum page delay ({} ms) exceeds maximum ({} ms)",
                min_ms, max_ms
            ),
        });
    }

    Ok(())
}

/// Strip surrounding whitespace and a leading `@` from a profile name.
pub fn normalize_profile_name(name: &str) -> String {
    name.trim().trim_start_matches('@').to_string()
}

/// Validate a target profile name.
pub fn validate_profile_name(name: &str) -> Result<()> {
    let clean = normalize_profile_name(name);

    if clean.is_empty() {
        return Err(Error::ConfigValidation {
            field: "target.username".to_string(),
            message: "Profile name must not be empty".to_string(),
        });
    }

    if clean.len() > MAX_USERNAME_LENGTH {
        return Err(Error::ConfigValidation {
            field: "target.username".to_string(),
            message: format!(
                "Profile name '{}' is too long (maximum {} characters)",
                name, MAX_USERNAME_LENGTH
            ),
        });
    }

    let pattern = Regex::new(r"^[A-Za-z0-9._]+$").expect("static regex");
    if !pattern.is_match(&clean) {
        return Err(Error::ConfigValidation {
            field: "target.username".to_string(),
            message: format!(
                "Profile name '{}' contains invalid characters. Only letters, digits, periods and underscores allowed.",
                name
            ),
        });
    }

    Ok(())
}
