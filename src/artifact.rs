//! The owned result of one conversion.

use serde::Serialize;

/// Everything one conversion produces, owned by the caller.
///
/// The persistence layer stores the pieces verbatim and serves them
/// later; the codec keeps no copy. Serialization skips the raw bytes:
/// JSON-style responses carry the base64 form and the fingerprint, while
/// the binary blob travels out of band.
#[derive(Debug, Clone, Serialize)]
pub struct EncodedArtifact {
    /// The complete packed bitmap file.
    #[serde(skip)]
    pub bytes: Vec<u8>,

    /// Target width the frame was rendered at.
    pub width: u32,

    /// Target height the frame was rendered at.
    pub height: u32,

    /// 32-character hex content fingerprint of `bytes`.
    pub fingerprint: String,

    /// Standard base64 encoding of `bytes`.
    pub base64: String,
}
