//! Route definitions for the `/admin` surface.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/api/admin`.
///
/// ```text
/// GET /videos         -> list_videos
/// POST /upload        -> upload (body limit: `max_upload_bytes`)
/// PUT /publish/{id}   -> publish
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/videos", get(admin::list_videos))
        .route(
            "/upload",
            post(admin::upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/publish/{id}", put(admin::publish))
}
