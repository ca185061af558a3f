//! Command-line interface: arguments and interactive prompts.

pub mod args;
pub mod prompt;

pub use args::Args;
pub use prompt::{
    is_yes, prompt_credentials, prompt_login_choice, prompt_target, Credentials, Prompt,
    TermPrompt,
};
