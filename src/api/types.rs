//! API response type definitions.

use serde::Deserialize;

/// Response of the web login endpoint.
///
/// The endpoint answers with the same shape for success and most failures,
/// often with HTTP 400, so every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub authenticated: Option<bool>,
    #[serde(default)]
    pub user: Option<bool>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub two_factor_required: Option<bool>,
    #[serde(default)]
    pub checkpoint_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Wrapper for /users/web_profile_info.
#[derive(Debug, Deserialize)]
pub struct ProfileInfoResponse {
    pub data: ProfileInfoData,
}

#[derive(Debug, Deserialize)]
pub struct ProfileInfoData {
    pub user: Option<UserInfo>,
}

/// Profile information.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub followed_by_viewer: bool,
    pub edge_owner_to_timeline_media: Option<EdgeCount>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeCount {
    pub count: u64,
}

/// One page of /feed/user/{id}.
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub items: Vec<FeedItem>,
    #[serde(default)]
    pub more_available: bool,
    pub next_max_id: Option<String>,
}

/// A feed item: a post, or a child of a carousel post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedItem {
    pub code: Option<String>,
    #[serde(default)]
    pub taken_at: i64,
    pub image_versions2: Option<ImageVersions>,
    #[serde(default)]
    pub video_versions: Vec<MediaCandidate>,
    #[serde(default)]
    pub carousel_media: Vec<FeedItem>,
    pub caption: Option<Caption>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageVersions {
    #[serde(default)]
    pub candidates: Vec<MediaCandidate>,
}

/// A rendition of an image or video.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaCandidate {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Caption {
    pub text: String,
}
