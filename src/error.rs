use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Every check that can produce one of these runs before any state is touched, so a failed call
/// leaves the finder exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridKnnError {
    /// A grid was requested with a zero width or height.
    #[error("Grid dimensions must be positive, got {width}x{height}.")]
    InvalidDimensions { width: u32, height: u32 },

    /// A dense grid of this size cannot be addressed or allocated.
    #[error("Grid of {width}x{height} cells is too large.")]
    GridTooLarge { width: u32, height: u32 },

    /// A coordinate lies outside `[0, width) x [0, height)`.
    #[error("Point ({x}, {y}) is outside the {width}x{height} grid.")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// A foreign coordinate value does not fit in an `i64`.
    #[error("Coordinate value cannot be represented as an integer grid position.")]
    InvalidCoordinate,

    /// `k` must be at least one.
    #[error("k must be positive.")]
    InvalidK,

    /// The destination cell already holds a different id.
    #[error("Cell ({x}, {y}) is already occupied by id {occupant}.")]
    CellOccupied { x: u32, y: u32, occupant: u32 },

    /// A finder name that does not match any [`FinderKind`][crate::FinderKind].
    #[error("Unknown finder kind {0:?}.")]
    UnknownFinder(String),
}

pub type Result<T> = std::result::Result<T, GridKnnError>;
