//! Login request helpers.

use chrono::Utc;

use crate::api::types::LoginResponse;
use crate::error::{Error, Result};

/// Name of the cookie carrying the CSRF token.
const CSRF_COOKIE: &str = "csrftoken";

/// Encode a password the way the web login form submits it.
///
/// Format: `#PWD_INSTAGRAM_BROWSER:0:<unix seconds>:<password>` (version 0 is
/// the unencrypted variant).
pub fn encode_password(password: &str, timestamp: i64) -> String {
    format!("#PWD_INSTAGRAM_BROWSER:0:{}:{}", timestamp, password)
}

/// Encode a password with the current time.
pub fn encode_password_now(password: &str) -> String {
    encode_password(password, Utc::now().timestamp())
}

/// Extract the CSRF token from a `Cookie` header value.
pub fn extract_csrf_token(cookie_header: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Interpret a login response, returning the logged-in user ID.
pub fn interpret_login_response(username: &str, response: &LoginResponse) -> Result<String> {
    if response.two_factor_required.unwrap_or(false) {
        return Err(Error::TwoFactorRequired);
    }

    if let Some(url) = &response.checkpoint_url {
        return Err(Error::Login(format!(
            "Checkpoint required. Point your browser to https://www.instagram.com{} and follow the instructions",
            url
        )));
    }

    if let Some(status) = response.status.as_deref() {
        if status != "ok" {
            return Err(Error::Login(
                response
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("status \"{}\"", status)),
            ));
        }
    }

    if response.authenticated.unwrap_or(false) {
        return Ok(response.user_id.clone().unwrap_or_default());
    }

    if !response.user.unwrap_or(false) {
        return Err(Error::InvalidArgument(format!(
            "user {} does not exist",
            username
        )));
    }

    Err(Error::BadCredentials)
}
