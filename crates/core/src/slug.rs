//! Video slug generation.
//!
//! A slug is the public identifier of a video and doubles as its reference
//! at the external hosting provider. It is never user-supplied.

use rand::Rng;

/// Number of random bytes in a slug.
pub const SLUG_BYTES: usize = 16;

/// Length of the rendered slug (two hex characters per byte).
pub const SLUG_LENGTH: usize = SLUG_BYTES * 2;

/// Generate a new slug from the thread-local CSPRNG.
///
/// Uniqueness is not checked here; the `videos.video_slug` UNIQUE constraint
/// is the backstop.
pub fn generate_video_slug() -> String {
    let mut bytes = [0u8; SLUG_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// Whether `slug` has the shape of a generated slug.
pub fn is_well_formed(slug: &str) -> bool {
    slug.len() == SLUG_LENGTH
        && slug
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }
}
