//! Route definitions for the public `/videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Routes mounted at `/api`.
///
/// ```text
/// GET /videos          -> list_videos
/// GET /videos/{slug}   -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos", get(public::list_videos))
        .route("/videos/{slug}", get(public::get_by_slug))
}
