//! Mathematical utilities for target size resolution

/// Max and least-common-multiple reduction of image dimensions
pub mod dimension;
