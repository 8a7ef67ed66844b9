//! Per-image stride patterns for round-robin interleaving

use crate::io::configuration::DEFAULT_STRIDE;
use crate::io::error::{CompositeError, Result, computation_error};

/// How many consecutive rows or columns each image contributes per cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StridePattern {
    values: Vec<usize>,
    total: usize,
}

impl StridePattern {
    /// Build a pattern from explicit counts
    ///
    /// # Errors
    ///
    /// Returns `StrideLengthMismatch` for an empty pattern,
    /// `InvalidStrideValue` for any count below one, and a computation error
    /// if the counts overflow when summed
    pub fn new(values: Vec<usize>) -> Result<Self> {
        if values.is_empty() {
            return Err(CompositeError::StrideLengthMismatch {
                stride_len: 0,
                image_count: 0,
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v < 1) {
            return Err(CompositeError::InvalidStrideValue { index, value });
        }
        let total = values
            .iter()
            .try_fold(0_usize, |acc, &value| acc.checked_add(value))
            .ok_or_else(|| {
                computation_error("stride total", &format!("{values:?} overflows when summed"))
            })?;
        Ok(Self { values, total })
    }

    /// One slice from each of `count` images per cycle
    pub fn uniform(count: usize) -> Self {
        Self {
            values: vec![DEFAULT_STRIDE; count],
            total: count * DEFAULT_STRIDE,
        }
    }

    /// Validate an optional user pattern against the image count
    ///
    /// `None` yields the uniform pattern.
    ///
    /// # Errors
    ///
    /// Returns `StrideLengthMismatch` if the pattern length differs from
    /// `image_count`, `InvalidStrideValue` for counts below one, or a
    /// computation error for counts whose sum overflows
    pub fn resolve(values: Option<Vec<usize>>, image_count: usize) -> Result<Self> {
        let Some(values) = values else {
            return Ok(Self::uniform(image_count));
        };
        if values.len() != image_count {
            return Err(CompositeError::StrideLengthMismatch {
                stride_len: values.len(),
                image_count,
            });
        }
        Self::new(values)
    }

    /// Slices emitted per full cycle over every image
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of images the pattern covers
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the pattern covers no images
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Per-image counts in input order
    pub fn values(&self) -> &[usize] {
        &self.values
    }
}
