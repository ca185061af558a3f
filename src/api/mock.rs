//! Scripted `MediaService` used by unit tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::service::{MediaService, PostPage, Profile};
use crate::error::{Error, Result};
use crate::media::{MediaKind, MediaNode, Post};

#[derive(Debug, Clone, Copy)]
pub enum LoginBehavior {
    Succeed,
    BadCredentials,
    TwoFactor,
    InvalidArgument,
}

#[derive(Debug, Clone)]
pub enum ProfileBehavior {
    Found(Profile),
    NotExists,
    Private,
    Fails(String),
}

#[derive(Debug, Clone)]
pub enum PostFailure {
    Status(u16),
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Resolve(String),
    Fetch(Option<String>),
    Download(String),
}

/// Shared record of calls, still readable after the mock was moved away.
pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub struct MockService {
    pub login: LoginBehavior,
    pub profile: ProfileBehavior,
    pub pages: Vec<Vec<Post>>,
    pub page_error_at: Option<usize>,
    pub failures: HashMap<String, PostFailure>,
    calls: CallLog,
}

impl MockService {
    pub fn new(username: &str) -> Self {
        Self {
            login: LoginBehavior::Succeed,
            profile: ProfileBehavior::Found(profile(username)),
            pages: Vec::new(),
            page_error_at: None,
            failures: HashMap::new(),
            calls: CallLog::default(),
        }
    }

    pub fn with_pages(mut self, pages: Vec<Vec<Post>>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_failure(mut self, shortcode: &str, failure: PostFailure) -> Self {
        self.failures.insert(shortcode.to_string(), failure);
        self
    }

    pub fn call_log(&self) -> CallLog {
        Arc::clone(&self.calls)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Shortcodes passed to `download_post`, in call order.
    pub fn downloads(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Download(code) => Some(code),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn profile(username: &str) -> Profile {
    Profile {
        id: format!("id-{}", username),
        username: username.to_string(),
        full_name: None,
        is_private: false,
        followed_by_viewer: false,
        post_count: None,
    }
}

/// An image post published `secs` seconds after the epoch.
pub fn post(shortcode: &str, secs: i64) -> Post {
    Post {
        shortcode: shortcode.to_string(),
        taken_at: DateTime::<Utc>::from_timestamp(secs, 0).unwrap(),
        caption: None,
        nodes: vec![MediaNode {
            kind: MediaKind::Image,
            url: format!("https://cdn.test/{}.jpg", shortcode),
        }],
    }
}

#[async_trait]
impl MediaService for MockService {
    async fn login(&mut self, username: &str, _password: &str) -> Result<()> {
        self.record(Call::Login(username.to_string()));
        match self.login {
            LoginBehavior::Succeed => Ok(()),
            LoginBehavior::BadCredentials => Err(Error::BadCredentials),
            LoginBehavior::TwoFactor => Err(Error::TwoFactorRequired),
            LoginBehavior::InvalidArgument => Err(Error::InvalidArgument(format!(
                "user {} does not exist",
                username
            ))),
        }
    }

    async fn resolve_profile(&self, username: &str) -> Result<Profile> {
        self.record(Call::Resolve(username.to_string()));
        match &self.profile {
            ProfileBehavior::Found(profile) => Ok(profile.clone()),
            ProfileBehavior::NotExists => Err(Error::ProfileNotExists(username.to_string())),
            ProfileBehavior::Private => {
                Err(Error::PrivateProfileNotFollowed(username.to_string()))
            }
            ProfileBehavior::Fails(message) => Err(Error::Api(message.clone())),
        }
    }

    async fn fetch_posts(&self, _profile: &Profile, cursor: Option<&str>) -> Result<PostPage> {
        self.record(Call::Fetch(cursor.map(str::to_string)));
        let index = cursor.and_then(|c| c.parse::<usize>().ok()).unwrap_or(0);

        if self.page_error_at == Some(index) {
            return Err(Error::Status {
                status: 500,
                url: format!("https://feed.test/{}", index),
            });
        }

        Ok(PostPage {
            posts: self.pages.get(index).cloned().unwrap_or_default(),
            next_cursor: (index + 1 < self.pages.len()).then(|| (index + 1).to_string()),
        })
    }

    async fn download_post(&self, post: &Post, target_dir: &Path) -> Result<()> {
        self.record(Call::Download(post.shortcode.clone()));

        match self.failures.get(&post.shortcode) {
            Some(PostFailure::Status(status)) => Err(Error::Status {
                status: *status,
                url: format!("https://cdn.test/{}.jpg", post.shortcode),
            }),
            Some(PostFailure::Message(message)) => Err(Error::Download(message.clone())),
            None => {
                for index in post.download_order() {
                    if let Some(name) = post.node_filename(index) {
                        std::fs::write(target_dir.join(name), b"media")?;
                    }
                }
                Ok(())
            }
        }
    }
}
