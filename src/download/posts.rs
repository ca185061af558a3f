//! Lazy post iteration over a profile feed.

use std::collections::VecDeque;

use crate::api::{MediaService, Profile};
use crate::error::Result;
use crate::media::Post;

/// Forward-only sequence of a profile's posts, in the order the service
/// returns them. Pages are fetched on demand. Once the last page has been
/// consumed, or a page fails, the iterator is exhausted for good.
pub struct PostIterator<'a, S: MediaService + ?Sized> {
    service: &'a S,
    profile: &'a Profile,
    buffer: VecDeque<Post>,
    cursor: Option<String>,
    exhausted: bool,
}

impl<'a, S: MediaService + ?Sized> PostIterator<'a, S> {
    pub fn new(service: &'a S, profile: &'a Profile) -> Self {
        Self {
            service,
            profile,
            buffer: VecDeque::new(),
            cursor: None,
            exhausted: false,
        }
    }

    /// Yield the next post, fetching another page when the buffer runs dry.
    pub async fn next_post(&mut self) -> Option<Result<Post>> {
        loop {
            if let Some(post) = self.buffer.pop_front() {
                return Some(Ok(post));
            }

            if self.exhausted {
                return None;
            }

            match self
                .service
                .fetch_posts(self.profile, self.cursor.as_deref())
                .await
            {
                Ok(page) => {
                    tracing::debug!(
                        "Fetched {} posts (more: {})",
                        page.posts.len(),
                        page.next_cursor.is_some()
                    );
                    self.exhausted = page.next_cursor.is_none();
                    self.cursor = page.next_cursor;
                    self.buffer.extend(page.posts);
                }
                Err(e) => {
                    self.exhausted = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
