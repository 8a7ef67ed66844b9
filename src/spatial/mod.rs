//! Pixel buffer types and spatial transformations
//!
//! This module contains:
//! - The pixel buffer alias and interleave direction
//! - Solid-color placeholder synthesis
//! - Wrap-tiling to a target size

/// Pixel buffer type and direction helpers
pub mod buffer;
/// Solid-color placeholder buffers
pub mod solid;
/// Wrap-tiling and cropping
pub mod tiling;

pub use buffer::{Direction, PixelBuffer};
