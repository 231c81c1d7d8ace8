//! Domain building blocks for the video catalog.
//!
//! This crate has no database or HTTP dependencies so the same rules apply
//! wherever a video record is created or exposed.

pub mod error;
pub mod hashing;
pub mod slug;
pub mod types;
pub mod video;
