//! Video metadata rules shared by the store and the admin service.

use crate::error::CoreError;

/// Entity name used in log fields.
pub const ENTITY: &str = "Video";

/// Returned when an upload has no usable title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Returned when an admin operation targets an id with no record.
pub const VIDEO_NOT_FOUND: &str = "Video not found";

/// Returned by the public surface for both unknown and unpublished slugs.
pub const VIDEO_NOT_FOUND_OR_UNPUBLISHED: &str = "Video not found or not published";

/// Validate an incoming title and return the value to persist.
///
/// Surrounding whitespace is trimmed; a missing or blank title is rejected.
pub fn validate_title(title: Option<&str>) -> Result<String, CoreError> {
    match title.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        _ => Err(CoreError::Validation(TITLE_REQUIRED.to_string())),
    }
}

/// An absent description is stored as the empty string.
pub fn normalize_description(description: Option<String>) -> String {
    description.unwrap_or_default()
}

/// Build the external playback reference for a slug.
///
/// The base is used verbatim, so it must end with whatever separator the
/// hosting provider expects (e.g. `https://host/v/`).
pub fn playback_url(hosting_base_url: &str, slug: &str) -> String {
    format!("{hosting_base_url}{slug}")
}
