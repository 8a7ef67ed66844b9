//! Loading of mixed file and placeholder inputs into equally sized buffers

use crate::io::configuration::SizeLimits;
use crate::io::error::{CompositeError, Result};
use crate::io::image::ImageCodec;
use crate::math::dimension::{TargetDimensions, TilingPolicy};
use crate::spatial::buffer::{PixelBuffer, dimensions};
use crate::spatial::solid::{SolidColor, synthesize};
use crate::spatial::tiling::expand;
use log::debug;
use std::fmt;
use std::path::PathBuf;

/// A single compositing input: an image file or a solid-color placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSpec {
    /// Image decoded from disk
    FilePath(PathBuf),
    /// Placeholder sized to the resolved target
    SolidColor(SolidColor),
}

impl ImageSpec {
    /// Interpret a command-line argument
    ///
    /// `white` and `black` (any case) become placeholders; everything else
    /// is taken as a path.
    pub fn parse(arg: &str) -> Self {
        arg.parse::<SolidColor>()
            .map_or_else(|_| Self::FilePath(PathBuf::from(arg)), Self::SolidColor)
    }

    /// True for solid-color placeholders
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::SolidColor(_))
    }
}

impl From<&str> for ImageSpec {
    fn from(arg: &str) -> Self {
        Self::parse(arg)
    }
}

impl fmt::Display for ImageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FilePath(path) => write!(f, "{}", path.display()),
            Self::SolidColor(color) => write!(f, "{color}"),
        }
    }
}

// Decoded images wait here until the target size is known
enum Slot {
    Decoded(PixelBuffer),
    Placeholder(SolidColor),
}

/// Decodes, validates, and tiles a set of inputs to one common size
pub struct ImageSetLoader<'a, C: ImageCodec> {
    codec: &'a C,
    limits: SizeLimits,
}

impl<'a, C: ImageCodec> ImageSetLoader<'a, C> {
    /// Create a loader over `codec` enforcing `limits`
    pub const fn new(codec: &'a C, limits: SizeLimits) -> Self {
        Self { codec, limits }
    }

    /// Load every input and return buffers of identical size in input order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A file cannot be decoded (`FileNotFound`, `UnsupportedFormat`, `ImageLoad`)
    /// - A decoded image exceeds the size limits (`ImageTooLarge`)
    /// - Every input is a placeholder (`NoRealImageProvided`)
    /// - The resolved target exceeds the size limits (`TargetTooLarge`)
    pub fn load(&self, specs: &[ImageSpec], policy: TilingPolicy) -> Result<Vec<PixelBuffer>> {
        let mut slots = Vec::with_capacity(specs.len());
        let mut widths = Vec::new();
        let mut heights = Vec::new();

        for spec in specs {
            match spec {
                ImageSpec::SolidColor(color) => slots.push(Slot::Placeholder(*color)),
                ImageSpec::FilePath(path) => {
                    let decoded = self.codec.decode(path)?;
                    debug!(
                        "decoded {} at {}x{}",
                        path.display(),
                        decoded.width,
                        decoded.height
                    );
                    if !self.limits.allows(decoded.width, decoded.height) {
                        return Err(CompositeError::ImageTooLarge {
                            path: path.clone(),
                            width: decoded.width,
                            height: decoded.height,
                            max_width: self.limits.max_width,
                            max_height: self.limits.max_height,
                        });
                    }
                    widths.push(decoded.width);
                    heights.push(decoded.height);
                    slots.push(Slot::Decoded(decoded.pixels));
                }
            }
        }

        if widths.is_empty() {
            return Err(CompositeError::NoRealImageProvided);
        }

        let target = TargetDimensions::resolve(&widths, &heights, policy)?;
        if !target.fits(&self.limits) {
            return Err(CompositeError::TargetTooLarge {
                width: target.width,
                height: target.height,
                max_width: self.limits.max_width,
                max_height: self.limits.max_height,
            });
        }
        debug!("resolved target {target} under {policy} policy");

        slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Placeholder(color) => Ok(synthesize(color, target.width, target.height)),
                Slot::Decoded(pixels) => {
                    let (width, height) = dimensions(&pixels);
                    if target.matches(width, height) {
                        Ok(pixels)
                    } else {
                        debug!("tiling {width}x{height} to {target}");
                        expand(&pixels, target.height, target.width)
                    }
                }
            })
            .collect()
    }
}
