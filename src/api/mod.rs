//! Instagram API module.
//!
//! This module provides:
//! - The `MediaService` trait the downloader is written against
//! - HTTP client for the Instagram web API
//! - Login request helpers
//! - API response types

pub mod auth;
pub mod client;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{InstagramApi, PAGE_SIZE};
pub use service::{MediaService, PostPage, Profile};
