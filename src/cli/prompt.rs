//! Interactive terminal prompts.

use std::fmt;
use std::io::BufRead;

use console::Term;

use crate::config::normalize_profile_name;
use crate::error::Result;

/// Source of interactive answers.
pub trait Prompt {
    /// Show `prompt` and read one line.
    fn read_line(&self, prompt: &str) -> Result<String>;

    /// Show `prompt` and read one line without echoing it.
    fn read_secret(&self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal.
pub struct TermPrompt {
    term: Term,
}

impl TermPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TermPrompt {
    fn read_line(&self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        if self.term.is_term() {
            return Ok(self.term.read_line()?);
        }

        // Piped input
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_secret(&self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        self.term.flush()?;
        Ok(self.term.read_secure_line()?)
    }
}

/// Login credentials. The password never shows up in debug output.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Ask for login credentials, reusing a username that is already known.
pub fn prompt_credentials<P: Prompt + ?Sized>(
    prompter: &P,
    known_username: Option<&str>,
) -> Result<Credentials> {
    let username = match known_username {
        Some(name) => name.trim().to_string(),
        None => prompter
            .read_line("Enter your Instagram username: ")?
            .trim()
            .to_string(),
    };
    let password = prompter
        .read_secret("Enter your Instagram password: ")?
        .trim()
        .to_string();

    Ok(Credentials { username, password })
}

/// Ask which profile to download from.
pub fn prompt_target<P: Prompt + ?Sized>(prompter: &P) -> Result<String> {
    let answer = prompter.read_line("Enter the Instagram username to download posts from: ")?;
    Ok(normalize_profile_name(&answer))
}

/// Ask whether to log in before downloading.
pub fn prompt_login_choice<P: Prompt + ?Sized>(prompter: &P) -> Result<bool> {
    let answer = prompter.read_line("Do you need to log in to download posts? (yes/no): ")?;
    Ok(is_yes(&answer))
}

/// Only an explicit "yes" (any case) counts.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
