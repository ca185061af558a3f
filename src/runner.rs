//! One interactive download run.

use crate::api::MediaService;
use crate::cli::{prompt_login_choice, prompt_target, Prompt};
use crate::config::{normalize_profile_name, validate_profile_name, Config};
use crate::download::{download_profile_posts, DownloadState};
use crate::error::{Error, Result};
use crate::output::{create_spinner, print_error, print_run_summary, print_success};
use crate::session::{bootstrap, Session};

/// How a run ended, when it did not end in a fatal error.
#[derive(Debug)]
pub enum RunOutcome {
    /// The whole post sequence was walked.
    Completed(DownloadState),
    ProfileNotFound,
    PrivateProfile,
    /// Some other error stopped the download phase.
    Aborted(String),
}

/// Run the downloader: choose a target, optionally log in, download.
///
/// Only login and prompt failures are returned as `Err`. Everything that goes
/// wrong after login is reported on the console and folded into the outcome.
pub async fn run_interactive<S: MediaService, P: Prompt + ?Sized>(
    service: S,
    prompter: &P,
    config: &Config,
) -> Result<RunOutcome> {
    let target = match &config.target.username {
        Some(name) => normalize_profile_name(name),
        None => prompt_target(prompter)?,
    };
    validate_profile_name(&target)?;

    let login = match config.options.login {
        Some(login) => login,
        None => prompt_login_choice(prompter)?,
    };

    let session = bootstrap(
        service,
        prompter,
        login,
        config.account.username.as_deref(),
    )
    .await?;

    match download_target(&session, &target, config).await {
        Ok(state) => {
            print_success(&format!(
                "All posts downloaded successfully from the profile: {}",
                target
            ));
            Ok(RunOutcome::Completed(state))
        }
        Err(e @ Error::ProfileNotExists(_)) => {
            print_error(&e.to_string());
            Ok(RunOutcome::ProfileNotFound)
        }
        Err(e @ Error::PrivateProfileNotFollowed(_)) => {
            print_error(&e.to_string());
            Ok(RunOutcome::PrivateProfile)
        }
        Err(e) => {
            print_error(&format!("An error occurred: {}", e));
            Ok(RunOutcome::Aborted(e.to_string()))
        }
    }
}

async fn download_target<S: MediaService>(
    session: &Session<S>,
    target: &str,
    config: &Config,
) -> Result<DownloadState> {
    let spinner = config
        .options
        .show_progress
        .then(|| create_spinner(&format!("Looking up {}...", target)));
    let profile = session.resolve_profile(target).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let profile = profile?;

    print_run_summary(
        &profile.username,
        profile.post_count,
        &config
            .download_directory()
            .join(&profile.username)
            .display()
            .to_string(),
    );

    download_profile_posts(session.service(), &profile, config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{post, Call, LoginBehavior, MockService, ProfileBehavior};
    use crate::cli::prompt::testing::ScriptedPrompt;
    use std::path::Path;

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::default();
        config.options.download_directory = Some(dir.to_path_buf());
        config.options.show_progress = false;
        config
    }

    #[tokio::test]
    async fn test_anonymous_run_downloads_all_posts() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let service = MockService::new("natgeo")
            .with_pages(vec![vec![post("a", 200), post("b", 100)]]);
        let prompter = ScriptedPrompt::new(&["natgeo", "no"]);

        let outcome = run_interactive(service, &prompter, &config).await.unwrap();

        match outcome {
            RunOutcome::Completed(state) => assert_eq!(state.downloaded, 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(
            prompter.asked(),
            vec![
                "Enter the Instagram username to download posts from: ",
                "Do you need to log in to download posts? (yes/no): ",
            ]
        );
        assert!(dir.path().join("natgeo").is_dir());
    }

    #[tokio::test]
    async fn test_login_choice_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let prompter = ScriptedPrompt::new(&["natgeo", " YES ", "me", "pw"]);

        let outcome = run_interactive(MockService::new("natgeo"), &prompter, &config)
            .await
            .unwrap();

        assert!(matches!(outcome, RunOutcome::Completed(_)));
        assert_eq!(prompter.asked().len(), 4);
    }

    #[tokio::test]
    async fn test_bad_credentials_stop_before_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.target.username = Some("natgeo".into());
        config.options.login = Some(true);
        config.account.username = Some("me".into());

        let mut service = MockService::new("natgeo").with_pages(vec![vec![post("a", 1)]]);
        service.login = LoginBehavior::BadCredentials;
        let log = service.call_log();
        let prompter = ScriptedPrompt::new(&["wrong"]);

        let err = run_interactive(service, &prompter, &config)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::BadCredentials));
        assert_eq!(*log.lock().unwrap(), vec![Call::Login("me".into())]);
        assert!(err.is_login_failure());
        assert!(!dir.path().join("natgeo").exists());
    }

    #[tokio::test]
    async fn test_login_failure_makes_no_further_calls() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut service = MockService::new("natgeo").with_pages(vec![vec![post("a", 1)]]);
        service.login = LoginBehavior::TwoFactor;
        let log = service.call_log();
        let prompter = ScriptedPrompt::new(&["natgeo", "yes", "me", "pw"]);

        let err = run_interactive(service, &prompter, &config)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::TwoFactorRequired));
        assert_eq!(*log.lock().unwrap(), vec![Call::Login("me".into())]);
    }

    #[tokio::test]
    async fn test_missing_profile_is_graceful() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut service = MockService::new("ghost");
        service.profile = ProfileBehavior::NotExists;
        let prompter = ScriptedPrompt::new(&["ghost", "no"]);

        let outcome = run_interactive(service, &prompter, &config).await.unwrap();

        assert!(matches!(outcome, RunOutcome::ProfileNotFound));
        assert!(!dir.path().join("ghost").exists());
    }

    #[tokio::test]
    async fn test_private_profile_is_graceful() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut service = MockService::new("hidden");
        service.profile = ProfileBehavior::Private;
        let prompter = ScriptedPrompt::new(&["hidden", "no"]);

        let outcome = run_interactive(service, &prompter, &config).await.unwrap();

        assert!(matches!(outcome, RunOutcome::PrivateProfile));
        assert!(!dir.path().join("hidden").exists());
    }

    #[tokio::test]
    async fn test_other_resolution_error_is_caught() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut service = MockService::new("natgeo");
        service.profile = ProfileBehavior::Fails("rate limited".into());
        let prompter = ScriptedPrompt::new(&["natgeo", "no"]);

        let outcome = run_interactive(service, &prompter, &config).await.unwrap();

        match outcome {
            RunOutcome::Aborted(message) => assert!(message.contains("rate limited")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_configured_target_and_login_skip_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.target.username = Some("@natgeo".into());
        config.options.login = Some(false);
        let prompter = ScriptedPrompt::new(&[]);

        let outcome = run_interactive(MockService::new("natgeo"), &prompter, &config)
            .await
            .unwrap();

        assert!(matches!(outcome, RunOutcome::Completed(_)));
        assert!(prompter.asked().is_empty());
    }

    #[tokio::test]
    async fn test_typed_target_with_invalid_characters_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let service = MockService::new("natgeo");
        let log = service.call_log();
        let prompter = ScriptedPrompt::new(&["nat geo&max_id=9#x", "no"]);

        let err = run_interactive(service, &prompter, &config)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ConfigValidation { .. }));
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(prompter.asked().len(), 1);
    }

    #[tokio::test]
    async fn test_resolution_uses_typed_target() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let service = MockService::new("natgeo");
        let prompter = ScriptedPrompt::new(&[]);
        let session = bootstrap(service, &prompter, false, None).await.unwrap();

        download_target(&session, "natgeo", &config).await.unwrap();

        assert_eq!(
            session.service().calls(),
            vec![Call::Resolve("natgeo".into()), Call::Fetch(None)]
        );
    }
}
