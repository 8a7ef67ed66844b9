//! Image decoding and encoding behind a codec seam
//!
//! Every decoded image is normalized to 3-channel RGB regardless of its
//! stored color mode (palette, grayscale, alpha).

use crate::io::configuration::CHANNELS;
use crate::io::error::{CompositeError, Result, computation_error};
use crate::spatial::buffer::PixelBuffer;
use image::{ImageError, RgbImage};
use std::path::Path;

/// A decoded source image with its natural size
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// RGB pixel data with axes (height, width, channel)
    pub pixels: PixelBuffer,
    /// Natural width in pixels
    pub width: usize,
    /// Natural height in pixels
    pub height: usize,
}

impl DecodedImage {
    /// Wrap an RGB buffer, taking the natural size from its shape
    pub fn from_buffer(pixels: PixelBuffer) -> Self {
        let (height, width, _) = pixels.dim();
        Self {
            pixels,
            width,
            height,
        }
    }
}

/// Reads source images and writes composites
pub trait ImageCodec {
    /// Decode the image at `path` into RGB
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound`, `UnsupportedFormat`, or `ImageLoad` when the
    /// file cannot be turned into pixels
    fn decode(&self, path: &Path) -> Result<DecodedImage>;

    /// Encode `buffer` to `path`
    ///
    /// # Errors
    ///
    /// Returns `WriteError` or `FileSystem` when the output cannot be written
    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()>;
}

/// Codec backed by the `image` crate, choosing formats by file extension
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCodec;

impl ImageCodec for FileCodec {
    fn decode(&self, path: &Path) -> Result<DecodedImage> {
        let img = image::open(path).map_err(|e| map_decode_error(path, e))?;
        let pixels = rgb_image_to_buffer(&img.to_rgb8())?;
        Ok(DecodedImage::from_buffer(pixels))
    }

    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        let img = buffer_to_rgb_image(buffer)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CompositeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        img.save(path).map_err(|e| CompositeError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

fn map_decode_error(path: &Path, error: ImageError) -> CompositeError {
    match error {
        ImageError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
            CompositeError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        ImageError::Unsupported(_) | ImageError::Decoding(_) => {
            CompositeError::UnsupportedFormat {
                path: path.to_path_buf(),
                source: error,
            }
        }
        _ => CompositeError::ImageLoad {
            path: path.to_path_buf(),
            source: error,
        },
    }
}

/// Copy an `RgbImage` into a (height, width, 3) buffer
///
/// # Errors
///
/// Returns a computation error if the raw pixel length disagrees with the
/// image dimensions
pub fn rgb_image_to_buffer(img: &RgbImage) -> Result<PixelBuffer> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    let pixels = PixelBuffer::from_shape_vec((height, width, CHANNELS), img.as_raw().clone())?;
    Ok(pixels)
}

/// Copy a (height, width, 3) buffer into an `RgbImage`
///
/// # Errors
///
/// Returns a computation error if the buffer does not have three channels or
/// its size does not fit the image dimension type
pub fn buffer_to_rgb_image(buffer: &PixelBuffer) -> Result<RgbImage> {
    let (height, width, channels) = buffer.dim();
    if channels != CHANNELS {
        return Err(computation_error(
            "rgb conversion",
            &format!("expected {CHANNELS} channels, found {channels}"),
        ));
    }

    let width = u32::try_from(width).map_err(|e| computation_error("rgb conversion", &e))?;
    let height = u32::try_from(height).map_err(|e| computation_error("rgb conversion", &e))?;
    let raw: Vec<u8> = buffer.iter().copied().collect();

    RgbImage::from_raw(width, height, raw)
        .ok_or_else(|| computation_error("rgb conversion", &"pixel count does not match size"))
}
