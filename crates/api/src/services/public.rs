use std::sync::Arc;

use vidcat_core::error::CoreError;
use vidcat_db::models::video::Video;
use vidcat_db::store::VideoStore;

/// Read-only view of the catalog restricted to published videos.
#[derive(Clone)]
pub struct PublicService {
    store: Arc<dyn VideoStore>,
}

impl PublicService {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }

    pub async fn list_published_videos(&self) -> Result<Vec<Video>, CoreError> {
        self.store.list_published().await
    }

    /// Unknown and unpublished slugs produce the same `NotFound`.
    pub async fn get_video_by_slug(&self, slug: &str) -> Result<Video, CoreError> {
        self.store.get_by_slug_published(slug).await
    }
}
