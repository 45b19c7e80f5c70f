//! Packed 1-bit-per-pixel bitmap container.
//!
//! A complete file is a 14-byte file header, a 40-byte info header, an
//! 8-byte two-entry palette (index 0 black, index 1 white), then one
//! packed row per grid row, each padded to a 4-byte boundary. Height is
//! stored negative: rows are top-down, matching the grid order, so the
//! panel firmware can stream rows without reordering.

mod decode;
mod encode;

pub use decode::{read_info, unpack, BitmapInfo};
pub use encode::encode;

use thiserror::Error;

/// Total header length: file header (14) + info header (40) + palette (8).
pub const HEADER_LEN: usize = 62;

/// Errors from parsing a packed bitmap.
#[derive(Debug, Error)]
pub enum BitmapError {
    /// The buffer does not start with the "BM" signature.
    #[error("not a bitmap: bad signature")]
    BadSignature,

    /// The buffer is shorter than its headers claim.
    #[error("truncated bitmap: {needed} bytes needed, {actual} available")]
    Truncated { needed: usize, actual: usize },

    /// Header dimensions overflow addressable memory.
    #[error("bitmap dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// A header field holds a value this codec never writes.
    #[error("unsupported bitmap: {0}")]
    Unsupported(String),
}

/// Packed row size in bytes: ceil(width / 8) rounded up to a multiple of 4.
#[inline]
pub fn padded_row_size(width: usize) -> usize {
    (width.div_ceil(8) + 3) & !3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_row_size_is_multiple_of_four() {
        for width in [1, 7, 8, 9, 10, 16, 17, 25, 33, 400] {
            assert_eq!(
                padded_row_size(width) % 4,
                0,
                "row size for width {} must be 4-byte aligned",
                width
            );
        }
    }

    #[test]
    fn test_padded_row_size_values() {
        assert_eq!(padded_row_size(0), 0);
        assert_eq!(padded_row_size(1), 4);
        assert_eq!(padded_row_size(8), 4);
        assert_eq!(padded_row_size(9), 4);
        assert_eq!(padded_row_size(10), 4); // 2 packed bytes + 2 padding
        assert_eq!(padded_row_size(32), 4);
        assert_eq!(padded_row_size(33), 8);
        assert_eq!(padded_row_size(400), 52);
    }
}
