//! Video entity model and its projections.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidcat_core::types::{DbId, Timestamp};
use vidcat_core::video::playback_url;

/// A row from the `videos` table. This is the admin view of a video.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub video_slug: String,
    pub is_published: bool,
    pub created_at: Timestamp,
}

/// Insert payload. The slug is generated by the store, never by callers.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub title: String,
    pub description: String,
    pub video_slug: String,
}

/// Public projection of a published video.
///
/// `is_published` is omitted since only published rows are ever projected.
#[derive(Debug, Clone, Serialize)]
pub struct PublicVideo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub video_slug: String,
    pub created_at: Timestamp,
    /// Playback reference at the external hosting provider.
    pub video_url: String,
}

impl PublicVideo {
    pub fn from_video(video: Video, hosting_base_url: &str) -> Self {
        let video_url = playback_url(hosting_base_url, &video.video_slug);
        Self {
            id: video.id,
            title: video.title,
            description: video.description,
            video_slug: video.video_slug,
            created_at: video.created_at,
            video_url,
        }
    }
}
