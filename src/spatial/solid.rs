//! Uniform placeholder images standing in for real inputs

use crate::io::configuration::{BLACK_VALUE, CHANNELS, WHITE_VALUE};
use crate::io::error::{CompositeError, Result};
use crate::spatial::buffer::PixelBuffer;
use std::fmt;
use std::str::FromStr;

/// Placeholder color accepted in place of an image path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidColor {
    /// Every channel 255
    White,
    /// Every channel 0
    Black,
}

impl SolidColor {
    /// Channel value used to fill the buffer
    pub const fn value(self) -> u8 {
        match self {
            Self::White => WHITE_VALUE,
            Self::Black => BLACK_VALUE,
        }
    }
}

impl FromStr for SolidColor {
    type Err = CompositeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => Err(CompositeError::InvalidColorName {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SolidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// Build a (height, width, 3) buffer filled with the given color
pub fn synthesize(color: SolidColor, width: usize, height: usize) -> PixelBuffer {
    PixelBuffer::from_elem((height, width, CHANNELS), color.value())
}

/// Parse a color keyword and build the matching placeholder buffer
///
/// # Errors
///
/// Returns `InvalidColorName` unless `name` is `white` or `black` (any case)
pub fn synthesize_named(name: &str, width: usize, height: usize) -> Result<PixelBuffer> {
    let color = name.parse::<SolidColor>()?;
    Ok(synthesize(color, width, height))
}
