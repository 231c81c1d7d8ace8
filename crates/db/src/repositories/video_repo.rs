//! Repository for the `videos` table.

use sqlx::PgPool;
use vidcat_core::types::DbId;

use crate::models::video::{CreateVideo, Video};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, video_slug, is_published, created_at";

/// Newest first; `id` breaks ties between rows created in the same instant.
const ORDER: &str = "ORDER BY created_at DESC, id DESC";

/// Provides the catalog's queries. Rows are never deleted.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new, unpublished video, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (title, description, video_slug)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.video_slug)
            .fetch_one(pool)
            .await
    }

    /// List every video, published or not.
    pub async fn list(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos {ORDER}");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// List published videos only.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE is_published {ORDER}");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// Find a video by slug, but only if it is published.
    ///
    /// Unknown and unpublished slugs both return `None`.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM videos WHERE video_slug = $1 AND is_published");
        sqlx::query_as::<_, Video>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Mark a video as published. Setting an already-published row is a no-op
    /// that still returns the row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET is_published = TRUE
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
