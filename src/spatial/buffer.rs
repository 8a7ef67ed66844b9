//! Pixel buffer representation and interleave direction

use crate::io::error::CompositeError;
use ndarray::{Array3, Axis};
use std::fmt;
use std::str::FromStr;

/// Dense RGB pixel data with axes (height, width, channel)
pub type PixelBuffer = Array3<u8>;

/// Axis along which rows or columns are interleaved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Direction {
    /// Alternate whole rows; output grows in height
    #[default]
    Rows,
    /// Alternate whole columns; output grows in width
    Columns,
}

impl Direction {
    /// Array axis that indexes the interleaved slices
    pub const fn axis(self) -> Axis {
        match self {
            Self::Rows => Axis(0),
            Self::Columns => Axis(1),
        }
    }

    /// Number of slices a buffer holds along this direction
    pub fn extent(self, buffer: &PixelBuffer) -> usize {
        buffer.len_of(self.axis())
    }
}

impl FromStr for Direction {
    type Err = CompositeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rows" => Ok(Self::Rows),
            "columns" => Ok(Self::Columns),
            _ => Err(CompositeError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => write!(f, "rows"),
            Self::Columns => write!(f, "columns"),
        }
    }
}

/// Width and height of a buffer, in that order
pub fn dimensions(buffer: &PixelBuffer) -> (usize, usize) {
    let (height, width, _) = buffer.dim();
    (width, height)
}
