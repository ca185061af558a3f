//! Post and media node representation.

use chrono::{DateTime, Utc};

/// Type of media in a post node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// File extension (without dot) written for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Video => "mp4",
        }
    }
}

/// A single downloadable image or video inside a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaNode {
    pub kind: MediaKind,
    pub url: String,
}

/// A published post.
#[derive(Debug, Clone)]
pub struct Post {
    /// Short unique identifier used in post URLs.
    pub shortcode: String,

    /// When the post was published.
    pub taken_at: DateTime<Utc>,

    /// Caption text, if any.
    pub caption: Option<String>,

    /// Media in display order. Carousels carry more than one node.
    pub nodes: Vec<MediaNode>,
}

impl Post {
    /// Filename stem shared by every artifact of this post:
    /// `<YYYY-MM-DD_HH-MM-SS>_<shortcode>`.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}",
            self.taken_at.format("%Y-%m-%d_%H-%M-%S"),
            self.shortcode
        )
    }

    /// Filename for the node at `index`. The first node carries no suffix so
    /// that it doubles as the already-downloaded marker.
    pub fn node_filename(&self, index: usize) -> Option<String> {
        let node = self.nodes.get(index)?;
        let stem = self.file_stem();

        Some(if index == 0 {
            format!("{}.{}", stem, node.kind.extension())
        } else {
            format!("{}_{}.{}", stem, index + 1, node.kind.extension())
        })
    }

    /// Node indices in write order: suffixed nodes first, the marker node last.
    pub fn download_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (1..self.nodes.len()).collect();
        if !self.nodes.is_empty() {
            order.push(0);
        }
        order
    }

    /// Filename for the caption text file.
    pub fn caption_filename(&self) -> String {
        format!("{}.txt", self.file_stem())
    }
}
