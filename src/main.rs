//! Insta Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use insta_downloader::{
    api::InstagramApi,
    cli::{Args, TermPrompt},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    output::{print_banner, print_error, print_info, print_warning},
    runner::{run_interactive, RunOutcome},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                e if e.is_login_failure() => ExitCode::from(exit_codes::LOGIN_FAILED as u8),
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    let api = InstagramApi::new(&config)?;
    let outcome = run_interactive(api, &TermPrompt::new(), &config).await?;

    match outcome {
        RunOutcome::Completed(state) => tracing::debug!(
            "Finished {} into {}: {} downloaded, {} skipped",
            state.profile_name,
            state.base_path.display(),
            state.downloaded,
            state.skipped
        ),
        other => tracing::debug!("Run ended early: {:?}", other),
    }

    Ok(())
}
