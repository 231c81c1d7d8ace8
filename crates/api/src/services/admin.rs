//! Privileged operations on the catalog.
//!
//! This service performs no authentication itself; the HTTP layer gates it
//! with [`crate::middleware::admin::RequireAdmin`].

use std::sync::Arc;

use vidcat_core::error::CoreError;
use vidcat_core::types::DbId;
use vidcat_core::video::{normalize_description, validate_title};
use vidcat_db::models::video::Video;
use vidcat_db::store::VideoStore;

#[derive(Clone)]
pub struct AdminService {
    store: Arc<dyn VideoStore>,
}

impl AdminService {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }

    /// Every video, published or not, newest first.
    pub async fn list_all_videos(&self) -> Result<Vec<Video>, CoreError> {
        self.store.list_all().await
    }

    /// Register a new unpublished video.
    ///
    /// The title is checked before the store is touched, so a rejected upload
    /// never creates a row.
    pub async fn upload_video(
        &self,
        title: Option<&str>,
        description: Option<String>,
    ) -> Result<Video, CoreError> {
        let title = validate_title(title)?;
        let description = normalize_description(description);
        self.store.create(&title, &description).await
    }

    /// Publish by id. Publishing twice is not an error.
    pub async fn publish_video(&self, id: DbId) -> Result<Video, CoreError> {
        self.store.publish(id).await
    }
}
