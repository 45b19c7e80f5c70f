//! Decoder: packed bitmap bytes back to header fields and pixels.
//!
//! Only the container this codec writes is supported (1 bit per pixel,
//! uncompressed, BITMAPINFOHEADER). Both row orders are accepted since
//! the sign of the stored height decides it, but the encoder always
//! writes top-down.

use mono_dither::{BLACK, WHITE};

use super::{padded_row_size, BitmapError, HEADER_LEN};

/// Header fields recovered from a packed bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels (absolute value of the stored height).
    pub height: u32,
    /// True when the stored height was negative (rows in top-down order).
    pub top_down: bool,
    /// Byte offset of the pixel data.
    pub pixel_data_offset: u32,
}

/// Parse and validate the headers of a packed bitmap.
pub fn read_info(bytes: &[u8]) -> Result<BitmapInfo, BitmapError> {
    if bytes.len() < HEADER_LEN {
        return Err(BitmapError::Truncated {
            needed: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    if &bytes[0..2] != b"BM" {
        return Err(BitmapError::BadSignature);
    }

    let pixel_data_offset = read_u32(bytes, 10);
    let info_size = read_u32(bytes, 14);
    if info_size != 40 {
        return Err(BitmapError::Unsupported(format!(
            "info header size {}",
            info_size
        )));
    }

    let raw_width = read_i32(bytes, 18);
    let raw_height = read_i32(bytes, 22);
    if raw_width < 0 {
        return Err(BitmapError::Unsupported("negative width".to_string()));
    }

    let planes = read_u16(bytes, 26);
    if planes != 1 {
        return Err(BitmapError::Unsupported(format!("{} planes", planes)));
    }

    let bits_per_pixel = read_u16(bytes, 28);
    if bits_per_pixel != 1 {
        return Err(BitmapError::Unsupported(format!(
            "{} bits per pixel",
            bits_per_pixel
        )));
    }

    let compression = read_u32(bytes, 30);
    if compression != 0 {
        return Err(BitmapError::Unsupported(format!(
            "compression {}",
            compression
        )));
    }

    Ok(BitmapInfo {
        width: raw_width as u32,
        height: raw_height.unsigned_abs(),
        top_down: raw_height < 0,
        pixel_data_offset,
    })
}

/// Unpack a bitmap into its header fields and one luma byte per pixel.
///
/// Set bits map to [`BLACK`], clear bits to [`WHITE`], mirroring the
/// encoder's palette. Rows come out in logical top-down order regardless
/// of the stored order.
pub fn unpack(bytes: &[u8]) -> Result<(BitmapInfo, Vec<u8>), BitmapError> {
    let info = read_info(bytes)?;
    let width = info.width as usize;
    let height = info.height as usize;
    let row_size = padded_row_size(width);

    let needed = (info.pixel_data_offset as usize)
        .checked_add(
            row_size
                .checked_mul(height)
                .ok_or(BitmapError::DimensionsTooLarge {
                    width: info.width,
                    height: info.height,
                })?,
        )
        .ok_or(BitmapError::DimensionsTooLarge {
            width: info.width,
            height: info.height,
        })?;
    if bytes.len() < needed {
        return Err(BitmapError::Truncated {
            needed,
            actual: bytes.len(),
        });
    }

    let mut luma = vec![WHITE; width * height];
    for row in 0..height {
        let stored_row = if info.top_down {
            row
        } else {
            height - 1 - row
        };
        let row_start = info.pixel_data_offset as usize + stored_row * row_size;
        for x in 0..width {
            let byte = bytes[row_start + x / 8];
            if (byte >> (7 - (x % 8))) & 1 == 1 {
                luma[row * width + x] = BLACK;
            }
        }
    }

    Ok((info, luma))
}

#[inline]
fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

#[inline]
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    read_u32(bytes, offset) as i32
}
