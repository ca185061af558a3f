//! Feed item parsing utilities.

use chrono::{DateTime, Utc};

use crate::api::types::{FeedItem, MediaCandidate};
use crate::media::item::{MediaKind, MediaNode, Post};

/// Parse a feed item into a Post, selecting the best resolution of each node.
///
/// Returns `None` for items without a shortcode or with an invalid timestamp.
pub fn parse_feed_item(item: &FeedItem) -> Option<Post> {
    let shortcode = item.code.clone()?;
    let taken_at = DateTime::<Utc>::from_timestamp(item.taken_at, 0)?;

    let nodes = if item.carousel_media.is_empty() {
        parse_node(item).into_iter().collect()
    } else {
        item.carousel_media.iter().filter_map(parse_node).collect()
    };

    Some(Post {
        shortcode,
        taken_at,
        caption: item
            .caption
            .as_ref()
            .map(|c| c.text.clone())
            .filter(|text| !text.is_empty()),
        nodes,
    })
}

/// Turn a single (non-carousel) item into a media node.
fn parse_node(item: &FeedItem) -> Option<MediaNode> {
    if let Some(video) = select_best_candidate(&item.video_versions) {
        return Some(MediaNode {
            kind: MediaKind::Video,
            url: video.url.clone(),
        });
    }

    let image = item
        .image_versions2
        .as_ref()
        .and_then(|versions| select_best_candidate(&versions.candidates))?;

    Some(MediaNode {
        kind: MediaKind::Image,
        url: image.url.clone(),
    })
}

/// Select the highest resolution candidate. Ties keep the earliest one.
fn select_best_candidate(candidates: &[MediaCandidate]) -> Option<&MediaCandidate> {
    let mut best: Option<&MediaCandidate> = None;

    for candidate in candidates {
        let resolution = (candidate.width as u64) * (candidate.height as u64);
        let best_resolution = best
            .map(|b| (b.width as u64) * (b.height as u64))
            .unwrap_or(0);

        if best.is_none() || resolution > best_resolution {
            best = Some(candidate);
        }
    }

    best
}
