//! Round-robin interleaving of rows or columns from several images
//!
//! Each image keeps its own source pointer, so a stride above one consumes
//! successive slices instead of repeating the same slice.

use crate::algorithm::stride::StridePattern;
use crate::io::configuration::{MAX_IMAGES, MAX_OUTPUT_BYTES, MIN_IMAGES};
use crate::io::error::{CompositeError, Result, computation_error};
use crate::spatial::buffer::{Direction, PixelBuffer, dimensions};

/// Check the image count against the interleaver's accepted range
///
/// # Errors
///
/// Returns `TooFewImages` below the minimum and `TooManyImages` above the maximum
pub fn validate_image_count(count: usize) -> Result<()> {
    if count < MIN_IMAGES {
        return Err(CompositeError::TooFewImages {
            count,
            min: MIN_IMAGES,
        });
    }
    if count > MAX_IMAGES {
        return Err(CompositeError::TooManyImages {
            count,
            max: MAX_IMAGES,
        });
    }
    Ok(())
}

// All buffers must share the first buffer's shape
fn validate_shapes(buffers: &[PixelBuffer]) -> Result<()> {
    let Some(first) = buffers.first() else {
        return Ok(());
    };
    for (index, buffer) in buffers.iter().enumerate().skip(1) {
        if buffer.dim() != first.dim() {
            return Err(CompositeError::DimensionMismatch {
                index,
                expected: dimensions(first),
                actual: dimensions(buffer),
            });
        }
    }
    Ok(())
}

// Output shape for `extent * stride_total` slices, bounded by `MAX_OUTPUT_BYTES`
fn output_shape(
    first: &PixelBuffer,
    direction: Direction,
    stride_total: usize,
) -> Result<(usize, usize, usize)> {
    let (height, width, channels) = first.dim();
    let extent = direction.extent(first);
    let output_extent = extent.checked_mul(stride_total).ok_or_else(|| {
        computation_error(
            "output size",
            &format!("{extent} slices times a stride total of {stride_total} overflows"),
        )
    })?;

    let shape = match direction {
        Direction::Rows => (output_extent, width, channels),
        Direction::Columns => (height, output_extent, channels),
    };
    let bytes = shape
        .0
        .checked_mul(shape.1)
        .and_then(|n| n.checked_mul(shape.2))
        .filter(|&n| n <= MAX_OUTPUT_BYTES);
    if bytes.is_none() {
        return Err(computation_error(
            "output size",
            &format!(
                "a {}x{} output exceeds the {MAX_OUTPUT_BYTES} byte limit",
                shape.1, shape.0
            ),
        ));
    }
    Ok(shape)
}

/// Interleave 2 to 6 equally sized buffers along `direction`
///
/// The output extent along the interleave axis is the input extent times
/// the stride total. With a `[1, 1]` stride and rows, output row `2k` is
/// row `k` of the first image and row `2k + 1` is row `k` of the second.
///
/// # Errors
///
/// Returns an error if:
/// - The buffer count is outside 2..=6 (`TooFewImages`, `TooManyImages`)
/// - The stride length differs from the buffer count (`StrideLengthMismatch`)
/// - Any buffer differs in shape from the first (`DimensionMismatch`)
/// - The output would overflow or exceed `MAX_OUTPUT_BYTES` (`Computation`)
pub fn interleave(
    buffers: &[PixelBuffer],
    direction: Direction,
    stride: &StridePattern,
) -> Result<PixelBuffer> {
    validate_image_count(buffers.len())?;
    if stride.len() != buffers.len() {
        return Err(CompositeError::StrideLengthMismatch {
            stride_len: stride.len(),
            image_count: buffers.len(),
        });
    }
    validate_shapes(buffers)?;

    let Some(first) = buffers.first() else {
        return Err(CompositeError::TooFewImages {
            count: 0,
            min: MIN_IMAGES,
        });
    };
    let axis = direction.axis();
    let extent = direction.extent(first);
    let mut output = PixelBuffer::zeros(output_shape(first, direction, stride.total())?);

    let mut pointers = vec![0_usize; buffers.len()];
    let mut out_idx = 0;

    for _ in 0..extent {
        for ((buffer, &count), pointer) in buffers
            .iter()
            .zip(stride.values())
            .zip(pointers.iter_mut())
        {
            for _ in 0..count {
                output
                    .index_axis_mut(axis, out_idx)
                    .assign(&buffer.index_axis(axis, *pointer));
                *pointer = (*pointer + 1) % extent;
                out_idx += 1;
            }
        }
    }

    Ok(output)
}
