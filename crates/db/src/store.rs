//! The video store seam.
//!
//! Services depend on [`VideoStore`] rather than on the pool so the admin and
//! public surfaces can be exercised without a database. [`PgVideoStore`] is
//! the production implementation on top of [`VideoRepo`].

use async_trait::async_trait;
use vidcat_core::error::CoreError;
use vidcat_core::slug::{generate_video_slug, is_well_formed};
use vidcat_core::types::DbId;
use vidcat_core::video::{
    validate_title, ENTITY, VIDEO_NOT_FOUND, VIDEO_NOT_FOUND_OR_UNPUBLISHED,
};

use crate::models::video::{CreateVideo, Video};
use crate::repositories::VideoRepo;
use crate::DbPool;

/// Persistent access to video records.
///
/// Every method is a single backend round trip. Not-found is reported as
/// [`CoreError::NotFound`]; backend failures as [`CoreError::Internal`].
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Persist a new unpublished video with a freshly generated slug.
    async fn create(&self, title: &str, description: &str) -> Result<Video, CoreError>;

    /// All videos, newest first.
    async fn list_all(&self) -> Result<Vec<Video>, CoreError>;

    /// Published videos, newest first.
    async fn list_published(&self) -> Result<Vec<Video>, CoreError>;

    /// The published video with this slug.
    async fn get_by_slug_published(&self, slug: &str) -> Result<Video, CoreError>;

    /// Set `is_published` on the video with this id. Idempotent.
    async fn publish(&self, id: DbId) -> Result<Video, CoreError>;

    /// Confirm the backend is reachable.
    async fn ping(&self) -> Result<(), CoreError>;
}

/// [`VideoStore`] backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgVideoStore {
    pool: DbPool,
}

impl PgVideoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn create(&self, title: &str, description: &str) -> Result<Video, CoreError> {
        let input = CreateVideo {
            title: validate_title(Some(title))?,
            description: description.to_string(),
            video_slug: generate_video_slug(),
        };
        debug_assert!(is_well_formed(&input.video_slug));
        let video = VideoRepo::create(&self.pool, &input)
            .await
            .map_err(|e| internal("create", e))?;
        tracing::info!(video_id = video.id, slug = %video.video_slug, "Video created");
        Ok(video)
    }

    async fn list_all(&self) -> Result<Vec<Video>, CoreError> {
        VideoRepo::list(&self.pool)
            .await
            .map_err(|e| internal("list_all", e))
    }

    async fn list_published(&self) -> Result<Vec<Video>, CoreError> {
        VideoRepo::list_published(&self.pool)
            .await
            .map_err(|e| internal("list_published", e))
    }

    async fn get_by_slug_published(&self, slug: &str) -> Result<Video, CoreError> {
        VideoRepo::find_published_by_slug(&self.pool, slug)
            .await
            .map_err(|e| internal("get_by_slug_published", e))?
            .ok_or_else(|| CoreError::NotFound(VIDEO_NOT_FOUND_OR_UNPUBLISHED.to_string()))
    }

    async fn publish(&self, id: DbId) -> Result<Video, CoreError> {
        let video = VideoRepo::publish(&self.pool, id)
            .await
            .map_err(|e| internal("publish", e))?
            .ok_or_else(|| CoreError::NotFound(VIDEO_NOT_FOUND.to_string()))?;
        tracing::info!(video_id = video.id, "Video published");
        Ok(video)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| internal("ping", e))
    }
}

/// Log a backend failure with full detail and hide it behind
/// [`CoreError::Internal`].
///
/// A unique violation on the slug is a random-collision and is reported the
/// same way; callers may simply retry.
fn internal(operation: &'static str, err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            tracing::error!(
                entity = ENTITY,
                operation,
                constraint = db_err.constraint().unwrap_or("unknown"),
                "Unique constraint violated, likely a slug collision"
            );
            return CoreError::Internal(format!("{operation}: {db_err}"));
        }
    }
    tracing::error!(entity = ENTITY, operation, error = %err, "Video store query failed");
    CoreError::Internal(format!("{operation}: {err}"))
}
