pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /videos                  list published (public)
/// /videos/{slug}           published detail (public)
///
/// /admin/videos            list all (admin)
/// /admin/upload            register metadata, multipart (admin)
/// /admin/publish/{id}      publish (admin)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .nest("/admin", admin::router(config.max_upload_bytes))
}
