//! Profile feed download loop.

use crate::api::{MediaService, Profile};
use crate::config::Config;
use crate::download::posts::PostIterator;
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::fs::{artifact_exists, ensure_dir, get_profile_folder};
use crate::output::{print_error, print_skip, print_warning};

/// Download every post of a profile that is not on disk yet.
///
/// Per-post failures are reported and skipped. Only a failure to prepare the
/// profile directory or to fetch the feed itself ends the loop early.
pub async fn download_profile_posts<S: MediaService + ?Sized>(
    service: &S,
    profile: &Profile,
    config: &Config,
) -> Result<DownloadState> {
    let profile_dir = get_profile_folder(config, &profile.username)?;
    ensure_dir(&profile_dir)?;

    let mut state = DownloadState::new(profile.username.clone(), profile_dir.clone());

    tracing::info!("Downloading posts of {}...", profile.username);

    let mut posts = PostIterator::new(service, profile);

    while let Some(post) = posts.next_post().await {
        let post = post?;
        let stem = post.file_stem();

        if artifact_exists(&profile_dir, &stem) {
            state.increment_skipped();
            if config.options.show_skipped {
                print_skip(&format!("Skipping {}, already downloaded.", stem));
            }
            continue;
        }

        match service.download_post(&post, &profile_dir).await {
            Ok(()) => {
                state.increment_downloaded();
                tracing::debug!("Downloaded {}", stem);
            }
            Err(e) if e.is_unavailable() => {
                state.increment_unavailable();
                print_warning(&format!(
                    "Post {} returned a 404/410 error. Skipping...",
                    stem
                ));
            }
            Err(e) => {
                state.increment_failed();
                print_error(&format!(
                    "An error occurred while downloading post {}: {}",
                    stem, e
                ));
            }
        }
    }

    tracing::debug!(
        "{}: {} posts seen, {} downloaded, {} skipped, {} unavailable, {} failed",
        state.profile_name,
        state.total_seen(),
        state.downloaded,
        state.skipped,
        state.unavailable,
        state.failed
    );

    Ok(state)
}
