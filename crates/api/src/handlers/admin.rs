//! Handlers for the `/api/admin` resource.

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Path, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use vidcat_core::error::CoreError;
use vidcat_core::types::DbId;
use vidcat_core::video::VIDEO_NOT_FOUND;
use vidcat_db::models::video::Video;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::state::AppState;

/// Multipart field carrying the video title.
const FIELD_TITLE: &str = "title";
/// Multipart field carrying the optional description.
const FIELD_DESCRIPTION: &str = "description";
/// Multipart field carrying the video binary. Read and discarded.
const FIELD_VIDEO_FILE: &str = "videoFile";

/// Upload metadata, from either a multipart form or a JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct UploadForm {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// GET /api/admin/videos
pub async fn list_videos(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Video>>> {
    let videos = state.admin.list_all_videos().await?;
    Ok(Json(videos))
}

/// POST /api/admin/upload
///
/// Accepts a multipart form with `title`, an optional `description` and an
/// optional `videoFile`, or a JSON body `{title, description}`. Only metadata
/// is persisted: the file is drained so the request completes, then dropped.
/// Hosting lives with the external provider referenced by the generated slug.
pub async fn upload(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    request: Request,
) -> AppResult<(StatusCode, Json<Video>)> {
    let form = if is_json(request.headers()) {
        let Json(form) = Json::<UploadForm>::from_request(request, &state)
            .await
            .map_err(|e| rejection(e.status(), e.body_text()))?;
        form
    } else {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| rejection(e.status(), e.body_text()))?;
        read_multipart(multipart).await?
    };

    let video = state
        .admin
        .upload_video(form.title.as_deref(), form.description)
        .await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// PUT /api/admin/publish/{id}
///
/// An id that is not an integer cannot match any row and is reported as
/// not found.
pub async fn publish(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Video>> {
    let id: DbId = id
        .parse()
        .map_err(|_| AppError::Core(CoreError::NotFound(VIDEO_NOT_FOUND.to_string())))?;
    let video = state.admin.publish_video(id).await?;
    Ok(Json(video))
}

async fn read_multipart(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            FIELD_TITLE => form.title = Some(field.text().await.map_err(multipart_error)?),
            FIELD_DESCRIPTION => {
                form.description = Some(field.text().await.map_err(multipart_error)?)
            }
            FIELD_VIDEO_FILE => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let mut discarded: usize = 0;
                while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                    discarded += chunk.len();
                }
                tracing::debug!(
                    file_name = %file_name,
                    bytes = discarded,
                    "Discarded uploaded video file"
                );
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

fn multipart_error(err: MultipartError) -> AppError {
    rejection(err.status(), err.body_text())
}

/// Map an extractor rejection onto the JSON error taxonomy, keeping the
/// body-limit distinction.
fn rejection(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}
