//! Conversion pipeline entry point.
//!
//! One call runs the whole codec: decode + contain resize + grayscale,
//! Floyd-Steinberg dithering, bit packing, then fingerprint and base64
//! derivation. The pipeline is synchronous and holds no state between
//! invocations; conversions on separate threads need no coordination.

use mono_dither::floyd_steinberg;

use crate::artifact::EncodedArtifact;
use crate::bitmap;
use crate::error::ConvertError;
use crate::fingerprint::{fingerprint, to_base64};
use crate::normalize::normalize;

/// Reusable converter for a fixed target frame size.
///
/// # Design
///
/// - Constructor captures the target dimensions; validation happens per
///   conversion so the error surfaces as a `Result`
/// - [`convert()`](Self::convert) takes `&self`, so one converter serves
///   any number of frames (and threads) for the same panel
///
/// # Example
///
/// ```no_run
/// use inkframe::Converter;
///
/// let converter = Converter::new(400, 300);
/// let artifact = converter.convert(&std::fs::read("photo.jpg")?)?;
///
/// assert_eq!(artifact.fingerprint.len(), 32);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    width: u32,
    height: u32,
}

impl Converter {
    /// Create a converter targeting `width` x `height` frames.
    ///
    /// Dimensions are a caller policy; nothing here assumes a particular
    /// panel size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Target frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Convert raw image bytes into an [`EncodedArtifact`].
    ///
    /// Fails with [`ConvertError::InvalidDimensions`] when either target
    /// dimension is zero, and with [`ConvertError::Decode`] when the
    /// source bytes are not a decodable image. Dithering and encoding
    /// cannot fail on a valid grid.
    pub fn convert(&self, data: &[u8]) -> Result<EncodedArtifact, ConvertError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let grid = normalize(data, self.width, self.height)?;
        let binary = floyd_steinberg(grid);
        let bytes = bitmap::encode(&binary);

        tracing::debug!(
            width = self.width,
            height = self.height,
            encoded_len = bytes.len(),
            "encoded frame"
        );

        let fingerprint = fingerprint(&bytes);
        let base64 = to_base64(&bytes);
        Ok(EncodedArtifact {
            bytes,
            width: self.width,
            height: self.height,
            fingerprint,
            base64,
        })
    }
}

/// One-shot conversion without building a [`Converter`].
pub fn convert(data: &[u8], width: u32, height: u32) -> Result<EncodedArtifact, ConvertError> {
    Converter::new(width, height).convert(data)
}
