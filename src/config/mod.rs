//! Configuration module for the insta-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{AccountConfig, Config, OptionsConfig, TargetConfig};
pub use validation::{normalize_profile_name, validate_config, validate_profile_name};
