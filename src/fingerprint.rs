//! Content fingerprint and text transform for encoded bitmaps.
//!
//! Both functions are pure: identical input bytes always yield identical
//! output, which the HTTP layer downstream relies on for conditional
//! requests (equal fingerprint means "not modified").

use base64::Engine;
use sha2::{Digest, Sha256};

/// Number of digest bytes kept in the fingerprint (32 hex characters).
const FINGERPRINT_BYTES: usize = 16;

/// Compute the content fingerprint of an encoded bitmap.
///
/// SHA-256 over exactly the given bytes, truncated to 128 bits and
/// hex-encoded. The fingerprint is a cache-validation token, not a
/// cryptographic integrity check; truncation is fine for that purpose.
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    hex::encode(&digest[..FINGERPRINT_BYTES])
}

/// Encode bitmap bytes as standard padded base64 for text channels.
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Decode a base64 string produced by [`to_base64`].
///
/// The device delivery path stores the text form and expects it to decode
/// back to exactly the encoded bitmap bytes.
pub fn from_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::engine::general_purpose::STANDARD.decode(text)
}
