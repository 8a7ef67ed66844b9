//! Same-size interlacing of two images by index parity

use crate::io::error::{CompositeError, Result};
use crate::spatial::buffer::{Direction, PixelBuffer, dimensions};
use ndarray::Slice;

/// Combine two equally sized buffers without changing their size
///
/// Even rows (or columns) come from `first`, odd ones from `second`, each
/// taken at the same index. The other parity of each input is discarded.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the buffers differ in shape
pub fn interlace(
    first: &PixelBuffer,
    second: &PixelBuffer,
    direction: Direction,
) -> Result<PixelBuffer> {
    if first.dim() != second.dim() {
        return Err(CompositeError::DimensionMismatch {
            index: 1,
            expected: dimensions(first),
            actual: dimensions(second),
        });
    }

    let axis = direction.axis();
    let odd = Slice::new(1, None, 2);

    let mut output = first.clone();
    output
        .slice_axis_mut(axis, odd)
        .assign(&second.slice_axis(axis, odd));

    Ok(output)
}
