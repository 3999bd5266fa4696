use geo_traits::CoordTrait;

use crate::kdtree::traversal::{nearest_into, Node};
use crate::r#type::{Neighbor, Point};

/// One stored point of a [`KDTree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct KDItem {
    pub(crate) id: u32,
    pub(crate) point: Point,
}

/// An immutable, balanced 2-d tree.
///
/// Usually this will be created via [`KDTreeBuilder`][crate::kdtree::KDTreeBuilder], or kept
/// up to date for you by a [`KdTreeFinder`][crate::kdtree::KdTreeFinder].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KDTree {
    /// kd-sorted items
    pub(crate) items: Vec<KDItem>,
}

impl KDTree {
    /// The number of points in this tree.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The up to `k` points closest to `query`, ascending by `(dist2, id)`.
    pub fn nearest(&self, query: Point, k: usize) -> Vec<Neighbor> {
        let mut result = Vec::with_capacity(k.min(self.len()));
        nearest_into(&self.items, query, k, &mut result);
        result
    }

    /// The up to `k` points closest to `coord`, ascending by `(dist2, id)`.
    pub fn nearest_coord(&self, coord: &impl CoordTrait<T = u32>, k: usize) -> Vec<Neighbor> {
        self.nearest(Point::new(coord.x(), coord.y()), k)
    }

    /// Access the root node of the tree for manual traversal, or `None` if it is empty.
    pub fn root(&self) -> Option<Node<'_>> {
        Node::from_root(self)
    }
}
