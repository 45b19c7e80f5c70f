//! inkframe: monochrome bitmap codec for e-paper display frames
//!
//! Takes an arbitrary raster image and produces a byte-exact packed
//! 1-bit-per-pixel bitmap for a small monochrome e-paper panel, plus a
//! content fingerprint for cache validation and a base64 transform for
//! text channels. The surrounding application (accounts, device
//! registration, HTTP, persistence) is an external collaborator: it hands
//! this crate decoded bytes and target dimensions, and stores whatever
//! comes back verbatim.
//!
//! # Quick Start
//!
//! ```no_run
//! use inkframe::Converter;
//!
//! let converter = Converter::new(400, 300);
//! let artifact = converter.convert(&std::fs::read("photo.jpg")?)?;
//!
//! // The caller owns all three forms
//! let _bitmap = &artifact.bytes;
//! let _etag = &artifact.fingerprint;
//! let _json_payload = &artifact.base64;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pipeline
//!
//! ```text
//! raw image bytes
//!     |
//!     v
//! normalize          decode, contain-resize, luminance grayscale
//!     |
//!     v
//! mono_dither        Floyd-Steinberg error diffusion to black/white
//!     |
//!     v
//! bitmap::encode     62-byte header + row-padded packed bits
//!     |
//!     v
//! EncodedArtifact    { bytes, fingerprint, base64 }
//! ```
//!
//! Control flow is a single-threaded linear pipeline. No stage retains
//! state between invocations, so conversions are independent and
//! reentrant; run as many in parallel as you like on separate threads.
//!
//! # Determinism
//!
//! Identical input bytes and dimensions always produce byte-identical
//! bitmaps and identical fingerprints. The dithering arithmetic is
//! integer-only and pinned by golden tests in the `mono-dither` crate;
//! the HTTP layer downstream depends on this for conditional requests.

pub mod artifact;
pub mod bitmap;
pub mod convert;
pub mod error;
pub mod fingerprint;
pub mod normalize;
pub mod preview;

pub use artifact::EncodedArtifact;
pub use bitmap::{BitmapError, BitmapInfo};
pub use convert::{convert, Converter};
pub use error::ConvertError;
pub use preview::preview_png;
