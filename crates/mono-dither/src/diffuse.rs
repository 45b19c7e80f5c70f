//! Sequential error diffusion over a grayscale grid.
//!
//! The diffusion loop has a strict left-to-right, top-to-bottom data
//! dependency: every quantization decision feeds error into pixels the
//! scan has not reached yet. It therefore runs sequentially over one
//! grid; callers that want parallelism run independent grids on
//! independent threads.

use crate::grid::{BinaryGrid, GrayGrid, BLACK, WHITE};
use crate::kernel::{Kernel, FLOYD_STEINBERG};

/// Quantization threshold: samples below this become black.
const THRESHOLD: i16 = 128;

/// Dither a grayscale grid to binary using the Floyd-Steinberg kernel.
///
/// # Example
///
/// ```
/// use mono_dither::{floyd_steinberg, GrayGrid};
///
/// let grid = GrayGrid::from_luma(&[0, 255, 255, 0], 2, 2);
/// let binary = floyd_steinberg(grid);
///
/// assert_eq!(binary.pixels(), &[0, 255, 255, 0]);
/// ```
pub fn floyd_steinberg(grid: GrayGrid) -> BinaryGrid {
    dither_with_kernel(grid, &FLOYD_STEINBERG)
}

/// Core error diffusion loop, parameterized by kernel.
///
/// Processes pixels in row-major order. Each pixel's accumulated sample
/// is quantized to [`BLACK`] or [`WHITE`], written back in place, and the
/// signed quantization error is distributed to in-bounds neighbors as
/// `error * weight / divisor` with truncating integer division.
/// Out-of-bounds contributions are dropped without renormalizing the
/// remaining weights.
///
/// Consumes the grid: the sample buffer is reused as scratch space and
/// handed back as the quantized result.
pub fn dither_with_kernel(mut grid: GrayGrid, kernel: &Kernel) -> BinaryGrid {
    let width = grid.width();
    let height = grid.height();
    let samples = grid.samples_mut();

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = samples[idx];
            let new = if old < THRESHOLD {
                i16::from(BLACK)
            } else {
                i16::from(WHITE)
            };
            samples[idx] = new;

            let error = old - new;

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i32 + dx;

                // Bounds check; ny >= y always holds since dy >= 0
                if nx >= 0 && (nx as usize) < width {
                    let ny = y + dy as usize;
                    if ny < height {
                        let term =
                            i32::from(error) * i32::from(weight) / i32::from(kernel.divisor);
                        samples[ny * width + nx as usize] += term as i16;
                    }
                }
            }
        }
    }

    let pixels = samples.iter().map(|&s| s as u8).collect();
    BinaryGrid::new(pixels, width, height)
}
