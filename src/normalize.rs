//! Source image normalization: decode, resize, grayscale.
//!
//! Turns arbitrary raster bytes into a grayscale grid of exactly the
//! target size. The resize policy is "contain": scale preserving aspect
//! ratio to fit within the target, then pad the remaining area with
//! white background rather than cropping or distorting. E-paper panels
//! idle white, so white padding blends into the bezel.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use mono_dither::{GrayGrid, WHITE};

use crate::error::ConvertError;

/// Background luma for the padded area.
pub const BACKGROUND: u8 = WHITE;

/// Decode raw image bytes and normalize to a `width` x `height` grayscale grid.
///
/// Decoding failures surface as [`ConvertError::Decode`] and abort the
/// pipeline before dithering. Color sources are reduced per pixel with the
/// standard luminance-weighted conversion before the contain placement.
pub fn normalize(data: &[u8], width: u32, height: u32) -> Result<GrayGrid, ConvertError> {
    let decoded = image::load_from_memory(data)?;
    let gray = decoded.to_luma8();
    tracing::debug!(
        src_width = gray.width(),
        src_height = gray.height(),
        width,
        height,
        "normalizing source image"
    );

    let canvas = contain(&gray, width, height);
    Ok(GrayGrid::from_luma(
        canvas.as_raw(),
        width as usize,
        height as usize,
    ))
}

/// Place `src` onto a white `width` x `height` canvas, scaled to fit.
fn contain(src: &GrayImage, width: u32, height: u32) -> GrayImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }

    let (fit_width, fit_height) = contain_dimensions(src.width(), src.height(), width, height);
    let scaled = if (fit_width, fit_height) == src.dimensions() {
        src.clone()
    } else {
        imageops::resize(src, fit_width, fit_height, FilterType::Lanczos3)
    };

    let mut canvas = GrayImage::from_pixel(width, height, Luma([BACKGROUND]));
    let x = i64::from((width - fit_width) / 2);
    let y = i64::from((height - fit_height) / 2);
    imageops::replace(&mut canvas, &scaled, x, y);
    canvas
}

/// Largest dimensions with the source aspect ratio that fit the target.
fn contain_dimensions(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> (u32, u32) {
    let scale = f64::min(
        f64::from(target_w) / f64::from(src_w),
        f64::from(target_h) / f64::from(src_h),
    );
    let w = (f64::from(src_w) * scale).round() as u32;
    let h = (f64::from(src_h) * scale).round() as u32;
    (w.clamp(1, target_w), h.clamp(1, target_h))
}
