//! A dense-grid finder that searches outward in square rings.

mod index;
mod ring;

pub use index::RingGridFinder;
pub use ring::RingCells;
