#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use vidcat_api::config::ServerConfig;
use vidcat_api::router::build_app_router;
use vidcat_api::state::AppState;
use vidcat_core::error::CoreError;
use vidcat_core::slug::generate_video_slug;
use vidcat_core::types::DbId;
use vidcat_core::video::{validate_title, VIDEO_NOT_FOUND, VIDEO_NOT_FOUND_OR_UNPUBLISHED};
use vidcat_db::models::video::Video;
use vidcat_db::store::VideoStore;

pub const TEST_HOSTING_BASE_URL: &str = "https://videos.test/v/";
pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// `VideoStore` over a `Vec`, with a switch that makes every call fail as a
/// backend outage would.
#[derive(Default)]
pub struct MemoryVideoStore {
    rows: Mutex<Vec<Video>>,
    failing: AtomicBool,
    stalled: AtomicBool,
}

impl MemoryVideoStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Make listing hang well past any test request timeout.
    pub fn set_stalled(&self, stalled: bool) {
        self.stalled.store(stalled, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check_backend(&self) -> Result<(), CoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CoreError::Internal("connection refused".into()));
        }
        Ok(())
    }

    /// Newest first, ties broken by id like the SQL ordering.
    fn sorted(rows: impl Iterator<Item = Video>) -> Vec<Video> {
        let mut rows: Vec<Video> = rows.collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn create(&self, title: &str, description: &str) -> Result<Video, CoreError> {
        self.check_backend()?;
        let title = validate_title(Some(title))?;
        let mut rows = self.rows.lock().unwrap();
        let video = Video {
            id: rows.len() as DbId + 1,
            title,
            description: description.to_string(),
            video_slug: generate_video_slug(),
            is_published: false,
            created_at: chrono::Utc::now(),
        };
        rows.push(video.clone());
        Ok(video)
    }

    async fn list_all(&self) -> Result<Vec<Video>, CoreError> {
        self.check_backend()?;
        if self.stalled.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        let rows = self.rows.lock().unwrap();
        Ok(Self::sorted(rows.iter().cloned()))
    }

    async fn list_published(&self) -> Result<Vec<Video>, CoreError> {
        self.check_backend()?;
        let rows = self.rows.lock().unwrap();
        Ok(Self::sorted(rows.iter().filter(|v| v.is_published).cloned()))
    }

    async fn get_by_slug_published(&self, slug: &str) -> Result<Video, CoreError> {
        self.check_backend()?;
        let rows = self.rows.lock().unwrap();
        rows.iter()
            .find(|v| v.video_slug == slug && v.is_published)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(VIDEO_NOT_FOUND_OR_UNPUBLISHED.to_string()))
    }

    async fn publish(&self, id: DbId) -> Result<Video, CoreError> {
        self.check_backend()?;
        let mut rows = self.rows.lock().unwrap();
        let video = rows
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| CoreError::NotFound(VIDEO_NOT_FOUND.to_string()))?;
        video.is_published = true;
        Ok(video.clone())
    }

    async fn ping(&self) -> Result<(), CoreError> {
        self.check_backend()
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults and no admin token.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 1024 * 1024,
        static_dir: "../../public".to_string(),
        video_hosting_base_url: TEST_HOSTING_BASE_URL.to_string(),
        admin_token: None,
    }
}

/// Same as [`test_config`] but with [`TEST_ADMIN_TOKEN`] enforced.
pub fn test_config_with_token() -> ServerConfig {
    ServerConfig {
        admin_token: Some(TEST_ADMIN_TOKEN.to_string()),
        ..test_config()
    }
}

pub fn test_config_with_timeout(request_timeout_secs: u64) -> ServerConfig {
    ServerConfig {
        request_timeout_secs,
        ..test_config()
    }
}

pub fn test_config_with_upload_limit(max_upload_bytes: usize) -> ServerConfig {
    ServerConfig {
        max_upload_bytes,
        ..test_config()
    }
}

/// Build the full application router over `store` with the production
/// middleware stack.
pub fn build_test_app(store: Arc<MemoryVideoStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: Arc<MemoryVideoStore>, config: ServerConfig) -> Router {
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "vidcat-test-boundary";

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_with_token(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn put(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Build a `multipart/form-data` body. `file` becomes the `videoFile` part.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"videoFile\"; filename=\"clip.mp4\"\r\nContent-Type: video/mp4\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(
    fields: &[(&str, &str)],
    file: Option<&[u8]>,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(multipart_body(fields, file))).unwrap()
}

/// POST `/api/admin/upload` with an arbitrary body and optional content type.
pub async fn post_upload_raw(
    app: Router,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/upload");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    send(app, builder.body(body.into()).unwrap()).await
}

pub async fn post_upload(app: Router, fields: &[(&str, &str)], file: Option<&[u8]>) -> Response<Body> {
    send(app, upload_request(fields, file, None)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
