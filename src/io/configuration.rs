//! Compositing constants and runtime size limits

// Source and target size limits
/// Maximum width of any decoded source image and of the resolved target
pub const MAX_IMAGE_WIDTH: usize = 2000;
/// Maximum height of any decoded source image and of the resolved target
pub const MAX_IMAGE_HEIGHT: usize = 2000;

// Interleaver input bounds
/// Minimum number of images an interleave needs
pub const MIN_IMAGES: usize = 2;
/// Maximum number of images an interleave accepts
pub const MAX_IMAGES: usize = 6;

/// Channels per pixel after normalization to RGB
pub const CHANNELS: usize = 3;

/// Largest interleaved output, in bytes, the compositor will allocate
pub const MAX_OUTPUT_BYTES: usize = 1 << 31;

// Placeholder colors
/// Channel value of a white placeholder
pub const WHITE_VALUE: u8 = 255;
/// Channel value of a black placeholder
pub const BLACK_VALUE: u8 = 0;

/// Rows or columns taken from each image per cycle when no stride is given
pub const DEFAULT_STRIDE: usize = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
/// Spinner refresh interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 80;

/// Upper bounds applied to source images and to the computed target size
///
/// Handed to the loader at construction so tests and embedders can lower or
/// raise the limit without touching process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    /// Largest accepted width in pixels
    pub max_width: usize,
    /// Largest accepted height in pixels
    pub max_height: usize,
}

impl SizeLimits {
    /// Create limits with explicit bounds
    pub const fn new(max_width: usize, max_height: usize) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Check whether a width/height pair lies within the limits
    pub const fn allows(&self, width: usize, height: usize) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self::new(MAX_IMAGE_WIDTH, MAX_IMAGE_HEIGHT)
    }
}
