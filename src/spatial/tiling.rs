//! Wrap-tiling of small images onto a larger target area
//!
//! The source is repeated whole along each axis, starting from index 0 in
//! every tile, and the result is cropped to the exact target size.

use crate::io::error::{Result, computation_error};
use crate::spatial::buffer::PixelBuffer;
use ndarray::{Axis, concatenate, s};

/// Number of whole copies needed to cover `target` with tiles of `current`
///
/// Never returns less than one, so a target smaller than the source still
/// yields a single tile to crop from.
pub const fn replication_count(target: usize, current: usize) -> usize {
    if current == 0 || target <= current {
        return 1;
    }
    target.div_ceil(current)
}

/// Tile `buffer` until it covers (`target_height`, `target_width`), then crop
///
/// # Errors
///
/// Returns a computation error if the source has a zero-length axis or if
/// the tiled array cannot be assembled
pub fn expand(
    buffer: &PixelBuffer,
    target_height: usize,
    target_width: usize,
) -> Result<PixelBuffer> {
    let (height, width, _) = buffer.dim();
    if height == 0 || width == 0 {
        return Err(computation_error(
            "tile expansion",
            &format!("cannot tile an empty {width}x{height} image"),
        ));
    }

    let tiles_y = replication_count(target_height, height);
    let tiles_x = replication_count(target_width, width);

    let column_views = vec![buffer.view(); tiles_y];
    let tall = concatenate(Axis(0), &column_views)?;
    let row_views = vec![tall.view(); tiles_x];
    let tiled = concatenate(Axis(1), &row_views)?;

    Ok(tiled.slice(s![..target_height, ..target_width, ..]).to_owned())
}
