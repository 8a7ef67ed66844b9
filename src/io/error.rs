//! Error types for image loading, validation, and compositing

use std::fmt;
use std::path::PathBuf;

/// Main error type for all compositing operations
#[derive(Debug)]
pub enum CompositeError {
    /// Placeholder keyword is neither `white` nor `black`
    InvalidColorName {
        /// The rejected color name
        name: String,
    },

    /// Tiling policy is neither `max` nor `lcm`
    InvalidPolicy {
        /// The rejected policy value
        value: String,
    },

    /// Interleave direction is neither `rows` nor `columns`
    InvalidMode {
        /// The rejected mode value
        value: String,
    },

    /// A stride entry is below one
    InvalidStrideValue {
        /// Position of the entry within the stride pattern
        index: usize,
        /// The rejected value
        value: usize,
    },

    /// Stride pattern length differs from the number of images
    StrideLengthMismatch {
        /// Number of stride entries supplied
        stride_len: usize,
        /// Number of images being interleaved
        image_count: usize,
    },

    /// More images than the interleaver accepts
    TooManyImages {
        /// Number of images supplied
        count: usize,
        /// Largest accepted count
        max: usize,
    },

    /// Fewer images than the interleaver needs
    TooFewImages {
        /// Number of images supplied
        count: usize,
        /// Smallest accepted count
        min: usize,
    },

    /// A decoded source image exceeds the size limit
    ImageTooLarge {
        /// Path of the offending image
        path: PathBuf,
        /// Natural width of the image
        width: usize,
        /// Natural height of the image
        height: usize,
        /// Allowed width
        max_width: usize,
        /// Allowed height
        max_height: usize,
    },

    /// The resolved target size exceeds the size limit
    TargetTooLarge {
        /// Computed target width
        width: usize,
        /// Computed target height
        height: usize,
        /// Allowed width
        max_width: usize,
        /// Allowed height
        max_height: usize,
    },

    /// Every input was a placeholder, so no target size can be derived
    NoRealImageProvided,

    /// Buffers handed to an interleave operation differ in shape
    DimensionMismatch {
        /// Position of the mismatching buffer
        index: usize,
        /// Shape of the first buffer as (width, height)
        expected: (usize, usize),
        /// Shape of the mismatching buffer as (width, height)
        actual: (usize, usize),
    },

    /// Source image does not exist
    FileNotFound {
        /// Path that could not be found
        path: PathBuf,
    },

    /// Source file is not in a format the codec can decode
    UnsupportedFormat {
        /// Path of the undecodable file
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// Failed to read a source image for any other reason
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or save the output image
    WriteError {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical or array computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColorName { name } => {
                write!(f, "Color must be 'white' or 'black', got '{name}'")
            }
            Self::InvalidPolicy { value } => {
                write!(f, "Tiling mode must be 'max' or 'lcm', got '{value}'")
            }
            Self::InvalidMode { value } => {
                write!(f, "Mode must be 'rows' or 'columns', got '{value}'")
            }
            Self::InvalidStrideValue { index, value } => {
                write!(
                    f,
                    "All stride values must be at least 1 (entry {index} is {value})"
                )
            }
            Self::StrideLengthMismatch {
                stride_len,
                image_count,
            } => {
                write!(
                    f,
                    "Stride length ({stride_len}) must match number of images ({image_count})"
                )
            }
            Self::TooManyImages { count, max } => {
                write!(
                    f,
                    "A maximum of {max} images can be interleaved, got {count}"
                )
            }
            Self::TooFewImages { count, min } => {
                write!(f, "At least {min} images are required, got {count}")
            }
            Self::ImageTooLarge {
                path,
                width,
                height,
                max_width,
                max_height,
            } => {
                write!(
                    f,
                    "Image '{}' size {width}x{height} exceeds the maximum allowed size of {max_width}x{max_height} pixels",
                    path.display()
                )
            }
            Self::TargetTooLarge {
                width,
                height,
                max_width,
                max_height,
            } => {
                write!(
                    f,
                    "Computed target size {width}x{height} exceeds the maximum allowed size of \
                     {max_width}x{max_height} pixels. Try using --tile-mode max or smaller images"
                )
            }
            Self::NoRealImageProvided => {
                write!(
                    f,
                    "At least one input must be a real image file (not all 'white'/'black')"
                )
            }
            Self::DimensionMismatch {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Image {index} is {}x{} but expected {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::FileNotFound { path } => {
                write!(f, "No such file: '{}'", path.display())
            }
            Self::UnsupportedFormat { path, source } => {
                write!(
                    f,
                    "Unsupported image format for '{}': {source}",
                    path.display()
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::WriteError { path, source } => {
                write!(f, "Failed to write image to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for CompositeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnsupportedFormat { source, .. }
            | Self::ImageLoad { source, .. }
            | Self::WriteError { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for compositing results
pub type Result<T> = std::result::Result<T, CompositeError>;

impl From<ndarray::ShapeError> for CompositeError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Computation {
            operation: "array shape",
            reason: err.to_string(),
        }
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> CompositeError {
    CompositeError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
