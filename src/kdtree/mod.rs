//! A balanced 2-d tree over grid points, and a finder that keeps one up to date lazily.
//!
//! The tree is stored as a single kd-sorted array: the node of a range `[left, right)` is its
//! middle element `left + (right - left) / 2`, its left subtree is the part before and its right
//! subtree the part after. Even depths split on x, odd depths on y.

#![warn(missing_docs)]

mod builder;
mod finder;
mod index;
mod traversal;

pub use builder::KDTreeBuilder;
pub use finder::KdTreeFinder;
pub use index::KDTree;
pub use traversal::Node;
