//! Error diffusion kernel definition.
//!
//! The kernel specifies how quantization error is distributed to
//! neighboring pixels that have not been processed yet.

/// An error diffusion kernel.
///
/// Each entry specifies an offset (dx, dy) and an integer weight for that
/// neighbor. A neighbor receives `error * weight / divisor`, computed with
/// truncating integer division. Entries only reach pixels the scan has not
/// visited yet: dy is never negative, and dx is positive when dy is 0.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, i16)],

    /// Total divisor for normalizing weights.
    pub divisor: i16,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Out-of-bounds neighbors are skipped without renormalizing the rest.
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagation_100_percent() {
        let sum: i16 = FLOYD_STEINBERG.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 16, "Floyd-Steinberg weights should sum to 16");
        assert_eq!(
            FLOYD_STEINBERG.divisor, 16,
            "Floyd-Steinberg divisor should be 16"
        );
    }

    #[test]
    fn test_floyd_steinberg_entry_count() {
        assert_eq!(
            FLOYD_STEINBERG.entries.len(),
            4,
            "Floyd-Steinberg should have 4 entries"
        );
    }

    #[test]
    fn test_floyd_steinberg_reaches_one_row_ahead() {
        let max_dy = FLOYD_STEINBERG
            .entries
            .iter()
            .map(|(_, dy, _)| *dy)
            .max()
            .unwrap();
        assert_eq!(max_dy, 1, "Floyd-Steinberg reaches 1 row ahead");
    }

    #[test]
    fn test_floyd_steinberg_never_reaches_visited_pixels() {
        for &(dx, dy, _) in FLOYD_STEINBERG.entries {
            assert!(dy >= 0, "kernel must not reach previous rows");
            if dy == 0 {
                assert!(dx > 0, "same-row entries must be to the right");
            }
        }
    }
}
