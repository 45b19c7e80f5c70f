//! mono-dither: Floyd-Steinberg error diffusion for 1-bit e-paper panels
//!
//! This library converts continuous-tone grayscale grids into binary
//! black/white grids using error diffusion, preserving perceived luminance
//! on displays that can only show two levels.
//!
//! # Quick Start
//!
//! ```
//! use mono_dither::{floyd_steinberg, GrayGrid};
//!
//! let grid = GrayGrid::from_luma(&[127; 16], 4, 4);
//! let binary = floyd_steinberg(grid);
//!
//! assert_eq!(binary.width(), 4);
//! assert!(binary.pixels().iter().all(|&p| p == 0 || p == 255));
//! ```
//!
//! # Pipeline Position
//!
//! ```text
//! grayscale samples (u8)
//!     |
//!     v
//! GrayGrid          (i16 samples, headroom for diffused error)
//!     |
//!     v
//! floyd_steinberg() (sequential error diffusion, integer arithmetic)
//!     |
//!     v
//! BinaryGrid        (every cell exactly 0 or 255)
//! ```
//!
//! # Integer Arithmetic
//!
//! The diffusion loop is deliberately integer-only. Samples live in an `i16`
//! buffer so accumulated error may transiently leave [0, 255], and each
//! diffused term is `error * weight / 16` with Rust's truncating division.
//! Downstream consumers pin the resulting bit patterns in golden tests, so
//! the arithmetic here must not change.

pub mod diffuse;
pub mod grid;
pub mod kernel;

pub use diffuse::{dither_with_kernel, floyd_steinberg};
pub use grid::{BinaryGrid, GrayGrid, BLACK, WHITE};
pub use kernel::{Kernel, FLOYD_STEINBERG};
