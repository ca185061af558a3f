//! Media module for post representation and parsing.

pub mod item;
pub mod parser;

pub use item::{MediaKind, MediaNode, Post};
pub use parser::parse_feed_item;
