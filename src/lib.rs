//! Row and column interleaving of several images into one composite
//!
//! Inputs of differing size are brought to a common target by wrap-tiling,
//! with the target chosen as either the largest size seen or the least common
//! multiple of all sizes. Solid white or black placeholders may stand in for
//! real images.

#![deny(unsafe_code)]

/// Loading, interleaving, and interlacing pipelines
pub mod algorithm;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Target size arithmetic
pub mod math;
/// Pixel buffers, placeholders, and tiling
pub mod spatial;

pub use io::error::{CompositeError, Result};
