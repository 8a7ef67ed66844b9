//! Compositing pipeline: validate, load, interleave, encode
//!
//! Input-contract checks run before any file is decoded, and the output is
//! only encoded once the whole buffer has been assembled, so a failed run
//! never leaves a partial file behind.

use crate::algorithm::interlace::interlace;
use crate::algorithm::interleave::{interleave, validate_image_count};
use crate::algorithm::loader::{ImageSetLoader, ImageSpec};
use crate::algorithm::stride::StridePattern;
use crate::io::configuration::{MIN_IMAGES, SizeLimits};
use crate::io::error::{CompositeError, Result};
use crate::io::image::ImageCodec;
use crate::math::dimension::TilingPolicy;
use crate::spatial::buffer::{Direction, PixelBuffer};
use log::{debug, info};
use std::fmt;
use std::path::{Path, PathBuf};

/// Step of a compositing run reported to a [`StageObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Decoding, synthesizing, and tiling the given number of inputs
    Loading(usize),
    /// Interleaving the loaded buffers
    Interleaving,
    /// Interlacing the two loaded buffers
    Interlacing,
    /// Encoding the result to the given path
    Writing(PathBuf),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading(count) => write!(f, "Loading {count} inputs"),
            Self::Interleaving => write!(f, "Interleaving"),
            Self::Interlacing => write!(f, "Interlacing"),
            Self::Writing(path) => write!(f, "Writing {}", path.display()),
        }
    }
}

/// Receives stage boundaries from the `*_to_file` operations
///
/// Every method defaults to doing nothing, so `()` serves as the silent observer.
pub trait StageObserver {
    /// Called once, after validation, with the number of stages to follow
    fn plan(&mut self, _stage_count: usize) {}

    /// Called as `stage` begins
    fn stage_started(&mut self, _stage: &Stage) {}

    /// Called once `stage` has succeeded
    fn stage_finished(&mut self, _stage: &Stage) {}
}

impl StageObserver for () {}

impl<O: StageObserver + ?Sized> StageObserver for &mut O {
    fn plan(&mut self, stage_count: usize) {
        (**self).plan(stage_count);
    }

    fn stage_started(&mut self, stage: &Stage) {
        (**self).stage_started(stage);
    }

    fn stage_finished(&mut self, stage: &Stage) {
        (**self).stage_finished(stage);
    }
}

// Run `work` between the start and finish notifications of `stage`
fn run_stage<T>(
    observer: &mut impl StageObserver,
    stage: Stage,
    work: impl FnOnce() -> Result<T>,
) -> Result<T> {
    observer.stage_started(&stage);
    let value = work()?;
    observer.stage_finished(&stage);
    Ok(value)
}

// Load, combine, write
const COMPOSITE_STAGES: usize = 3;
const INTERLACE_STAGES: usize = 3;

/// Options controlling an N-image composite
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeOptions {
    /// Whether rows or columns are interleaved
    pub direction: Direction,
    /// How differing input sizes are reconciled
    pub policy: TilingPolicy,
    /// Slices taken from each image per cycle; `None` means one each
    pub stride: Option<Vec<usize>>,
}

/// Runs composite and interlace operations over a codec
pub struct Compositor<C: ImageCodec> {
    codec: C,
    limits: SizeLimits,
}

impl<C: ImageCodec> Compositor<C> {
    /// Create a compositor with explicit size limits
    pub const fn new(codec: C, limits: SizeLimits) -> Self {
        Self { codec, limits }
    }

    /// The codec used for decoding and encoding
    pub const fn codec(&self) -> &C {
        &self.codec
    }

    /// The size limits applied to inputs and targets
    pub const fn limits(&self) -> SizeLimits {
        self.limits
    }

    /// Loader sharing this compositor's codec and limits
    pub const fn loader(&self) -> ImageSetLoader<'_, C> {
        ImageSetLoader::new(&self.codec, self.limits)
    }

    /// Check image count and stride before any decoding work
    ///
    /// # Errors
    ///
    /// Returns `TooFewImages`, `TooManyImages`, `StrideLengthMismatch`, or
    /// `InvalidStrideValue`
    pub fn validate(specs: &[ImageSpec], options: &CompositeOptions) -> Result<StridePattern> {
        validate_image_count(specs.len())?;
        StridePattern::resolve(options.stride.clone(), specs.len())
    }

    /// Load every input and interleave the results
    ///
    /// # Errors
    ///
    /// Returns any validation, loading, or interleaving error
    pub fn composite(&self, specs: &[ImageSpec], options: &CompositeOptions) -> Result<PixelBuffer> {
        self.composite_observed(specs, options, &mut ())
    }

    fn composite_observed(
        &self,
        specs: &[ImageSpec],
        options: &CompositeOptions,
        observer: &mut impl StageObserver,
    ) -> Result<PixelBuffer> {
        let stride = Self::validate(specs, options)?;
        observer.plan(COMPOSITE_STAGES);

        let buffers = run_stage(observer, Stage::Loading(specs.len()), || {
            self.loader().load(specs, options.policy)
        })?;
        debug!(
            "interleaving {} images by {} with stride {:?}",
            buffers.len(),
            options.direction,
            stride.values()
        );
        run_stage(observer, Stage::Interleaving, || {
            interleave(&buffers, options.direction, &stride)
        })
    }

    /// Composite and write the result to `output`, reporting each stage
    ///
    /// # Errors
    ///
    /// Returns any compositing error, or a write error from the codec
    pub fn composite_to_file(
        &self,
        specs: &[ImageSpec],
        options: &CompositeOptions,
        output: &Path,
        mut observer: impl StageObserver,
    ) -> Result<()> {
        let buffer = self.composite_observed(specs, options, &mut observer)?;
        run_stage(&mut observer, Stage::Writing(output.to_path_buf()), || {
            self.codec.encode(&buffer, output)
        })?;
        info!("wrote composite to {}", output.display());
        Ok(())
    }

    /// Interlace two inputs at their common size
    ///
    /// # Errors
    ///
    /// Returns any loading error, or `DimensionMismatch` if the loader hands
    /// back differently sized buffers
    pub fn interlace(
        &self,
        first: &ImageSpec,
        second: &ImageSpec,
        direction: Direction,
        policy: TilingPolicy,
    ) -> Result<PixelBuffer> {
        self.interlace_observed(first, second, direction, policy, &mut ())
    }

    fn interlace_observed(
        &self,
        first: &ImageSpec,
        second: &ImageSpec,
        direction: Direction,
        policy: TilingPolicy,
        observer: &mut impl StageObserver,
    ) -> Result<PixelBuffer> {
        observer.plan(INTERLACE_STAGES);
        let specs = [first.clone(), second.clone()];
        let buffers = run_stage(observer, Stage::Loading(specs.len()), || {
            self.loader().load(&specs, policy)
        })?;
        debug!("interlacing {first} and {second} by {direction}");
        run_stage(observer, Stage::Interlacing, || match buffers.as_slice() {
            [a, b] => interlace(a, b, direction),
            _ => Err(CompositeError::TooFewImages {
                count: buffers.len(),
                min: MIN_IMAGES,
            }),
        })
    }

    /// Interlace two inputs and write the result to `output`, reporting each stage
    ///
    /// # Errors
    ///
    /// Returns any interlacing error, or a write error from the codec
    pub fn interlace_to_file(
        &self,
        first: &ImageSpec,
        second: &ImageSpec,
        direction: Direction,
        policy: TilingPolicy,
        output: &Path,
        mut observer: impl StageObserver,
    ) -> Result<()> {
        let buffer = self.interlace_observed(first, second, direction, policy, &mut observer)?;
        run_stage(&mut observer, Stage::Writing(output.to_path_buf()), || {
            self.codec.encode(&buffer, output)
        })?;
        info!("wrote interlace to {}", output.display());
        Ok(())
    }
}

impl<C: ImageCodec + Default> Default for Compositor<C> {
    fn default() -> Self {
        Self::new(C::default(), SizeLimits::default())
    }
}
