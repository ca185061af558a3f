//! Session bootstrap.

use crate::api::{MediaService, Profile};
use crate::cli::{prompt_credentials, Prompt};
use crate::error::Result;
use crate::output::print_success;

/// A remote client plus what is known about who is using it.
pub struct Session<S> {
    service: S,
    login_username: Option<String>,
}

impl<S: MediaService> Session<S> {
    /// Session without a login. Only public profiles are reachable.
    pub fn anonymous(service: S) -> Self {
        Self {
            service,
            login_username: None,
        }
    }

    /// Log in and return an authenticated session.
    pub async fn login(mut service: S, username: &str, password: &str) -> Result<Self> {
        service.login(username, password).await?;
        Ok(Self {
            service,
            login_username: Some(username.to_string()),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.login_username.is_some()
    }

    pub fn login_username(&self) -> Option<&str> {
        self.login_username.as_deref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Resolve a username to a profile.
    pub async fn resolve_profile(&self, username: &str) -> Result<Profile> {
        self.service.resolve_profile(username).await
    }
}

/// Start a session, logging in first when asked to.
///
/// Login failures are returned as errors; the caller treats them as fatal.
pub async fn bootstrap<S: MediaService, P: Prompt + ?Sized>(
    service: S,
    prompter: &P,
    login: bool,
    known_username: Option<&str>,
) -> Result<Session<S>> {
    if !login {
        tracing::debug!("Continuing without login");
        return Ok(Session::anonymous(service));
    }

    let credentials = prompt_credentials(prompter, known_username)?;
    tracing::debug!("Logging in as {}", credentials.username);

    let session = Session::login(service, &credentials.username, &credentials.password).await?;
    print_success("Login successful!");

    Ok(session)
}
