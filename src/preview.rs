//! Preview rendering: packed bitmap to grayscale PNG.
//!
//! Dashboards want to show what the panel will display without teaching
//! the browser to parse 1-bit bitmaps. The preview is a pure function of
//! the bitmap bytes.

use crate::bitmap;
use crate::error::ConvertError;

/// Re-encode a packed bitmap as an 8-bit grayscale PNG.
///
/// The PNG has the same dimensions as the bitmap and carries exactly the
/// two luma levels (0 and 255). Fails with [`ConvertError::Bitmap`] when
/// the input is not a bitmap this codec produced, and with
/// [`ConvertError::InvalidDimensions`] for header-only files (PNG cannot
/// represent a zero-size image).
pub fn preview_png(bmp: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let (info, luma) = bitmap::unpack(bmp)?;
    if info.width == 0 || info.height == 0 {
        return Err(ConvertError::InvalidDimensions {
            width: info.width,
            height: info.height,
        });
    }

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, info.width, info.height);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    writer
        .write_image_data(&luma)
        .map_err(|e| ConvertError::PngEncode(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| ConvertError::PngEncode(e.to_string()))?;

    Ok(out)
}
