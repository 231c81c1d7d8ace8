//! Server-side gate for the admin surface.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vidcat_core::error::CoreError;
use vidcat_core::hashing::secrets_match;

use crate::error::AppError;
use crate::state::AppState;

/// Requires `Authorization: Bearer <ADMIN_TOKEN>` when a token is configured.
///
/// With no token configured every request passes; startup logs a warning in
/// that case.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            return Ok(RequireAdmin);
        };

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if !secrets_match(token.trim(), expected) {
            tracing::warn!(uri = %parts.uri, "Rejected admin request with invalid token");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin token".into(),
            )));
        }

        Ok(RequireAdmin)
    }
}
