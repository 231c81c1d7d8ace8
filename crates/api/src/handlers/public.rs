//! Handlers for the public `/api/videos` resource.

use axum::extract::{Path, State};
use axum::Json;
use vidcat_db::models::video::PublicVideo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/videos
pub async fn list_videos(State(state): State<AppState>) -> AppResult<Json<Vec<PublicVideo>>> {
    let base = &state.config.video_hosting_base_url;
    let videos = state
        .public
        .list_published_videos()
        .await?
        .into_iter()
        .map(|v| PublicVideo::from_video(v, base))
        .collect();
    Ok(Json(videos))
}

/// GET /api/videos/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PublicVideo>> {
    let video = state.public.get_video_by_slug(&slug).await?;
    Ok(Json(PublicVideo::from_video(
        video,
        &state.config.video_hosting_base_url,
    )))
}
