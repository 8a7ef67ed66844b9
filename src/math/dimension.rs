//! Target size resolution across heterogeneous input dimensions
//!
//! Under the `lcm` policy both axes are resolved to their least common
//! multiple, whichever direction the images are later interleaved in.

use crate::io::configuration::SizeLimits;
use crate::io::error::{CompositeError, Result, computation_error};
use num_traits::PrimInt;
use std::fmt;
use std::str::FromStr;

/// Strategy for reconciling differing image sizes along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TilingPolicy {
    /// Use the largest size seen
    #[default]
    Max,
    /// Use the least common multiple so every input tiles a whole number of times
    Lcm,
}

impl FromStr for TilingPolicy {
    type Err = CompositeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(Self::Max),
            "lcm" => Ok(Self::Lcm),
            _ => Err(CompositeError::InvalidPolicy {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TilingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => write!(f, "max"),
            Self::Lcm => write!(f, "lcm"),
        }
    }
}

/// Greatest common divisor by the Euclidean algorithm
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while b != T::zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Least common multiple, saturating at `T::max_value()`
///
/// Divides by the gcd before multiplying so intermediate values stay as small
/// as the result allows.
pub fn lcm<T: PrimInt>(a: T, b: T) -> T {
    if a == T::zero() || b == T::zero() {
        return T::zero();
    }
    let divisor = gcd(a, b);
    (a / divisor).checked_mul(&b).unwrap_or_else(T::max_value)
}

/// Reduce one axis worth of sizes to a single target size
///
/// # Errors
///
/// Returns a computation error if `values` is empty
pub fn resolve(values: &[usize], policy: TilingPolicy) -> Result<usize> {
    let (&first, rest) = values
        .split_first()
        .ok_or_else(|| computation_error("dimension resolution", &"no sizes to resolve"))?;

    let resolved = match policy {
        TilingPolicy::Max => rest.iter().copied().fold(first, usize::max),
        TilingPolicy::Lcm => rest.iter().copied().fold(first, lcm),
    };
    Ok(resolved)
}

/// Common width and height every buffer of one operation is brought to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDimensions {
    /// Target width in pixels
    pub width: usize,
    /// Target height in pixels
    pub height: usize,
}

impl TargetDimensions {
    /// Resolve width and height independently under the same policy
    ///
    /// # Errors
    ///
    /// Returns a computation error if either list is empty
    pub fn resolve(widths: &[usize], heights: &[usize], policy: TilingPolicy) -> Result<Self> {
        Ok(Self {
            width: resolve(widths, policy)?,
            height: resolve(heights, policy)?,
        })
    }

    /// Check the target against the configured size limits
    pub const fn fits(&self, limits: &SizeLimits) -> bool {
        limits.allows(self.width, self.height)
    }

    /// Whether a buffer of the given size already matches the target
    pub const fn matches(&self, width: usize, height: usize) -> bool {
        self.width == width && self.height == height
    }
}

impl fmt::Display for TargetDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
