//! Encoder: BinaryGrid to packed bitmap bytes.

use mono_dither::BinaryGrid;

use super::{padded_row_size, HEADER_LEN};

/// Horizontal and vertical resolution written to the info header (~72 DPI).
const PPM_72DPI: u32 = 2835;

/// Encode a binary grid as a complete packed bitmap file.
///
/// Rows are packed 8 pixels per byte, most significant bit first. A set
/// bit selects palette index 0 (black); white pixels leave the bit clear,
/// so trailing bits past the grid width in the last byte of a row stay 0.
/// Each packed row is padded with zero bytes to a 4-byte boundary.
///
/// The encoder is a total function: a zero-width or zero-height grid
/// produces a valid header-only file with empty pixel data. Dimension
/// policy belongs to the pipeline entry, not here.
pub fn encode(grid: &BinaryGrid) -> Vec<u8> {
    let width = grid.width();
    let height = grid.height();
    let row_size = padded_row_size(width);
    let pixel_data_size = row_size * height;
    let file_size = HEADER_LEN + pixel_data_size;

    let mut out = Vec::with_capacity(file_size);
    write_header(
        &mut out,
        file_size,
        pixel_data_size,
        width as u32,
        height as u32,
    );

    let pad_bytes = row_size - width.div_ceil(8);
    for y in 0..height {
        for x0 in (0..width).step_by(8) {
            let mut byte = 0u8;
            for bit in 0..8 {
                let x = x0 + bit;
                if x < width && grid.is_black(x, y) {
                    byte |= 1 << (7 - bit);
                }
            }
            out.push(byte);
        }
        out.extend(std::iter::repeat_n(0u8, pad_bytes));
    }

    debug_assert_eq!(out.len(), file_size);
    out
}

fn write_header(
    out: &mut Vec<u8>,
    file_size: usize,
    pixel_data_size: usize,
    width: u32,
    height: u32,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes()); // pixel data offset

    // Info header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(-(height as i32)).to_le_bytes()); // negative = top-down
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&1u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (none)
    out.extend_from_slice(&(pixel_data_size as u32).to_le_bytes());
    out.extend_from_slice(&PPM_72DPI.to_le_bytes()); // h resolution
    out.extend_from_slice(&PPM_72DPI.to_le_bytes()); // v resolution
    out.extend_from_slice(&2u32.to_le_bytes()); // colors in palette
    out.extend_from_slice(&2u32.to_le_bytes()); // important colors

    // Two-entry palette, BGRA byte order
    out.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // index 0: black
    out.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0x00]); // index 1: white
}
