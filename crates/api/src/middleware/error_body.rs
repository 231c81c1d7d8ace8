//! Response mapping for errors produced outside any handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Replace the empty 408 emitted by the timeout layer with the JSON error
/// body every other failure carries.
pub async fn timeout_error_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }
    response
}
