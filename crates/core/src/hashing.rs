//! SHA-256 hex digest helper.
//!
//! Used to compare admin tokens without comparing the raw secrets.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Compare two secrets by digest.
pub fn secrets_match(presented: &str, expected: &str) -> bool {
    sha256_hex(presented.as_bytes()) == sha256_hex(expected.as_bytes())
}
