//! Request extractors that gate access, and response mapping layers.
//!
//! - [`admin::RequireAdmin`] -- Requires the configured admin bearer token.
//! - [`error_body::timeout_error_body`] -- JSON body for timeout responses.

pub mod admin;
pub mod error_body;
