//! Instagram web API HTTP client.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;
use url::Url;

use crate::api::auth::{encode_password_now, extract_csrf_token, interpret_login_response};
use crate::api::service::{MediaService, PostPage, Profile};
use crate::api::types::{FeedResponse, LoginResponse, ProfileInfoResponse};
use crate::config::Config;
use crate::download::media::{save_caption, save_response};
use crate::error::{Error, Result};
use crate::media::{parse_feed_item, Post};

/// Instagram web base URL.
const WEB_BASE: &str = "https://www.instagram.com";

/// App ID the web frontend sends with API requests.
const IG_APP_ID: &str = "936619743392459";

/// Posts requested per feed page.
pub const PAGE_SIZE: u32 = 12;

/// Instagram web client with a shared cookie jar.
pub struct InstagramApi {
    client: Client,
    jar: Arc<Jar>,
    viewer_id: Option<String>,
    page_delay_ms: (u64, u64),
    save_captions: bool,
    show_progress: bool,
}

impl InstagramApi {
    /// Create a new anonymous client.
    pub fn new(config: &Config) -> Result<Self> {
        let jar = Arc::new(Jar::default());

        let mut headers = header::HeaderMap::new();
        headers.insert("x-ig-app-id", header::HeaderValue::from_static(IG_APP_ID));
        headers.insert(
            "x-requested-with",
            header::HeaderValue::from_static("XMLHttpRequest"),
        );
        headers.insert(
            header::REFERER,
            header::HeaderValue::from_static("https://www.instagram.com/"),
        );

        let client = Client::builder()
            .user_agent(&config.account.user_agent)
            .default_headers(headers)
            .cookie_provider(jar.clone())
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            jar,
            viewer_id: None,
            page_delay_ms: (
                config.options.page_delay_min_ms,
                config.options.page_delay_max_ms,
            ),
            save_captions: config.options.save_captions,
            show_progress: config.options.show_progress,
        })
    }

    /// ID of the logged-in account, if any.
    pub fn viewer_id(&self) -> Option<&str> {
        self.viewer_id.as_deref()
    }

    /// Read the CSRF token from the cookie jar.
    fn csrf_token(&self) -> Option<String> {
        let url = Url::parse(WEB_BASE).ok()?;
        let cookies = self.jar.cookies(&url)?;
        extract_csrf_token(cookies.to_str().ok()?)
    }

    /// Build a GET request against the web API, with the CSRF header when known.
    fn request(&self, path: &str, query: &[(&str, &str)]) -> RequestBuilder {
        let mut request = self
            .client
            .get(format!("{}{}", WEB_BASE, path))
            .query(query);
        if let Some(token) = self.csrf_token() {
            request = request.header("x-csrftoken", token);
        }
        request
    }

    /// Make a GET request against the web API.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        tracing::debug!("GET {}{} {:?}", WEB_BASE, path, query);

        let response = self.request(path, query).send().await?;

        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }

    /// Wait a random delay between feed pages.
    async fn page_delay(&self) {
        let (min, max) = self.page_delay_ms;
        if max == 0 {
            return;
        }
        let delay_ms = rand::thread_rng().gen_range(min..=max);
        sleep(Duration::from_millis(delay_ms)).await;
    }

    /// Download a file from a URL.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

/// First 500 characters of a response body, for error messages.
fn preview(text: &str) -> &str {
    match text.char_indices().nth(500) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[async_trait]
impl MediaService for InstagramApi {
    async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() {
            return Err(Error::InvalidArgument("username must not be empty".into()));
        }

        // Landing page sets the csrftoken cookie
        self.get("/", &[]).await?;
        let csrf = self
            .csrf_token()
            .ok_or_else(|| Error::Login("No CSRF token received".into()))?;

        let enc_password = encode_password_now(password);
        let form = [
            ("username", username),
            ("enc_password", enc_password.as_str()),
            ("queryParams", "{}"),
            ("optIntoOneTap", "false"),
        ];

        let response = self
            .client
            .post(format!("{}/api/v1/web/accounts/login/ajax/", WEB_BASE))
            .header("x-csrftoken", csrf)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("Login response ({}): {}", status, text);

        let login: LoginResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Login(format!("Unexpected login response (HTTP {}): {}", status, e))
        })?;

        let user_id = interpret_login_response(username, &login)?;
        self.viewer_id = Some(user_id);

        Ok(())
    }

    async fn resolve_profile(&self, username: &str) -> Result<Profile> {
        let response = self
            .get("/api/v1/users/web_profile_info/", &[("username", username)])
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::ProfileNotExists(username.to_string()));
        }

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Profile response: {} bytes", text.len());

        let info: ProfileInfoResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse profile: {} - Response: {}",
                e,
                preview(&text)
            ))
        })?;

        let user = info
            .data
            .user
            .ok_or_else(|| Error::ProfileNotExists(username.to_string()))?;

        let is_viewer = self.viewer_id.as_deref() == Some(user.id.as_str());
        if user.is_private && !user.followed_by_viewer && !is_viewer {
            return Err(Error::PrivateProfileNotFollowed(username.to_string()));
        }

        Ok(Profile {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            is_private: user.is_private,
            followed_by_viewer: user.followed_by_viewer,
            post_count: user.edge_owner_to_timeline_media.map(|e| e.count),
        })
    }

    async fn fetch_posts(&self, profile: &Profile, cursor: Option<&str>) -> Result<PostPage> {
        let path = format!("/api/v1/feed/user/{}/", profile.id);
        let count = PAGE_SIZE.to_string();
        let mut query = vec![("count", count.as_str())];
        if let Some(cursor) = cursor {
            self.page_delay().await;
            query.push(("max_id", cursor));
        }

        let response = self.get(&path, &query).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Feed response: {} bytes", text.len());

        let feed: FeedResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse feed: {} - Response: {}",
                e,
                preview(&text)
            ))
        })?;

        let posts = feed.items.iter().filter_map(parse_feed_item).collect();
        let next_cursor = if feed.more_available {
            feed.next_max_id
        } else {
            None
        };

        Ok(PostPage { posts, next_cursor })
    }

    async fn download_post(&self, post: &Post, target_dir: &Path) -> Result<()> {
        for index in post.download_order() {
            let (Some(node), Some(filename)) = (post.nodes.get(index), post.node_filename(index))
            else {
                continue;
            };

            let response = self.download_file(&node.url).await?;
            let saved = save_response(response, &target_dir.join(filename), self.show_progress)
                .await?;
            tracing::debug!("Saved {}", saved.display());
        }

        if self.save_captions {
            if let Some(caption) = &post.caption {
                save_caption(caption, &target_dir.join(post.caption_filename())).await?;
            }
        }

        Ok(())
    }
}
