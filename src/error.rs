use thiserror::Error;

use crate::bitmap::BitmapError;

/// Unified error type for the conversion pipeline.
///
/// Every variant is a deterministic function of the input, so retrying a
/// failed conversion without changing the input cannot succeed. The caller
/// is responsible for translating these into user-facing responses.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source image could not be decoded (corrupt or unsupported format).
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// A target dimension was zero.
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A packed bitmap handed to the decode/preview path was malformed.
    #[error("bitmap error: {0}")]
    Bitmap(#[from] BitmapError),

    /// Preview PNG encoding failed.
    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_display() {
        let error = ConvertError::InvalidDimensions {
            width: 0,
            height: 300,
        };
        assert_eq!(error.to_string(), "invalid target dimensions: 0x300");
    }

    #[test]
    fn test_png_encode_display() {
        let error = ConvertError::PngEncode("buffer closed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: buffer closed");
    }

    #[test]
    fn test_convert_error_from_bitmap_error() {
        let bitmap_error = BitmapError::BadSignature;
        let error: ConvertError = bitmap_error.into();
        match error {
            ConvertError::Bitmap(_) => {}
            _ => panic!("Expected Bitmap variant"),
        }
    }
}
