#![doc = include_str!("../README.md")]

pub mod bruteforce;
mod entries;
mod error;
pub mod finder;
pub mod kdtree;
pub mod ringgrid;
pub mod topk;
mod r#type;
mod util;

pub use bruteforce::BruteForceFinder;
pub use error::GridKnnError;
pub use finder::{AnyFinder, FinderKind, NearestFinder, DEFAULT_K};
pub use kdtree::KdTreeFinder;
pub use r#type::{Neighbor, Point};
pub use ringgrid::RingGridFinder;

#[cfg(test)]
pub(crate) mod test;
