//! Argument validation shared by every finder.

use num_traits::PrimInt;

use crate::error::{GridKnnError, Result};
use crate::r#type::Point;

/// Reject grids with a zero dimension.
pub(crate) fn check_dims(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(GridKnnError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Validate `(x, y)` against `[0, width) x [0, height)` and convert it to a [`Point`].
pub(crate) fn check_point(width: u32, height: u32, x: i64, y: i64) -> Result<Point> {
    let in_range = |v: i64, extent: u32| (0..extent as i64).contains(&v);
    if !in_range(x, width) || !in_range(y, height) {
        return Err(GridKnnError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(Point::new(x as u32, y as u32))
}

pub(crate) fn check_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(GridKnnError::InvalidK);
    }
    Ok(())
}

/// Widen a foreign integer coordinate to `i64`.
pub(crate) fn coord_to_i64<T: PrimInt>(value: T) -> Result<i64> {
    value.to_i64().ok_or(GridKnnError::InvalidCoordinate)
}
