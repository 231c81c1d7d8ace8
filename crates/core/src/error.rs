/// Domain-level error shared by the store, the services and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No record matched. The message is safe to show to callers.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Backend or connectivity failure. The detail is logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}
