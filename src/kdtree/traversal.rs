//! Utilities to traverse the KDTree structure.

use tinyvec::TinyVec;

use crate::kdtree::index::{KDItem, KDTree};
use crate::topk::{insert_bounded, may_accept};
use crate::r#type::{Neighbor, Point};

/// A node in the KDTree, covering the kd-sorted range `[left, right)`.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    tree: &'a KDTree,

    /// The axis this node splits on: 0 for x, 1 for y.
    axis: usize,

    left: usize,
    right: usize,
}

impl<'a> Node<'a> {
    pub(crate) fn from_root(tree: &'a KDTree) -> Option<Self> {
        Self::from_range(tree, 0, tree.len(), 0)
    }

    fn from_range(tree: &'a KDTree, left: usize, right: usize, axis: usize) -> Option<Self> {
        (left < right).then_some(Self {
            tree,
            axis,
            left,
            right,
        })
    }

    /// Note: this is the index into the kd-sorted items, not the insertion index.
    #[inline]
    fn middle_index(&self) -> usize {
        middle(self.left, self.right)
    }

    /// The id stored at this node.
    pub fn id(&self) -> u32 {
        self.tree.items[self.middle_index()].id
    }

    /// The point stored at this node.
    pub fn point(&self) -> Point {
        self.tree.items[self.middle_index()].point
    }

    /// The axis this node splits its children on: 0 for x, 1 for y.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The number of points in the subtree rooted here, this node included.
    pub fn subtree_len(&self) -> usize {
        self.right - self.left
    }

    /// The child holding points ordered before this one on [`Node::axis`].
    pub fn left_child(&self) -> Option<Node<'a>> {
        Self::from_range(self.tree, self.left, self.middle_index(), 1 - self.axis)
    }

    /// The child holding points ordered after this one on [`Node::axis`].
    pub fn right_child(&self) -> Option<Node<'a>> {
        Self::from_range(self.tree, self.middle_index() + 1, self.right, 1 - self.axis)
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.subtree_len() == 1
    }
}

#[inline]
fn middle(left: usize, right: usize) -> usize {
    left + (right - left) / 2
}

/// A pending subtree visit.
#[derive(Debug, Clone, Copy, Default)]
struct Frame {
    left: usize,
    right: usize,
    axis: usize,
    /// squared distance from the query to the splitting plane that separates this subtree
    plane_dist2: u64,
}

/// Branch-and-bound k-nearest search over kd-sorted `items`, accumulating into `result`.
///
/// Each node's own point is tested first, then the subtree on the query's side of the split
/// (ties go left), then the other subtree only if its splitting plane is no farther than the
/// current worst accepted distance. The explicit stack visits nodes in exactly that order.
pub(crate) fn nearest_into(items: &[KDItem], query: Point, k: usize, result: &mut Vec<Neighbor>) {
    if k == 0 {
        return;
    }

    // Use TinyVec to avoid heap allocations
    let mut stack: TinyVec<[Frame; 32]> = TinyVec::new();
    stack.push(Frame {
        left: 0,
        right: items.len(),
        axis: 0,
        plane_dist2: 0,
    });

    while let Some(frame) = stack.pop() {
        if frame.left >= frame.right {
            continue;
        }
        // far side: only worth visiting if the plane is within the current worst
        if !may_accept(result, k, frame.plane_dist2) {
            continue;
        }

        let m = middle(frame.left, frame.right);
        let item = items[m];
        insert_bounded(
            result,
            Neighbor::new(item.id, item.point, query.sq_dist(&item.point)),
            k,
        );

        let qv = query.axis_value(frame.axis);
        let nv = item.point.axis_value(frame.axis);
        let plane_dist2 = (qv.abs_diff(nv) as u64).pow(2);

        let lower = Frame {
            left: frame.left,
            right: m,
            axis: 1 - frame.axis,
            plane_dist2: 0,
        };
        let upper = Frame {
            left: m + 1,
            right: frame.right,
            axis: 1 - frame.axis,
            plane_dist2: 0,
        };
        let (near, far) = if qv <= nv {
            (lower, upper)
        } else {
            (upper, lower)
        };

        // Note: pushed in reverse, so the near side is fully searched first
        stack.push(Frame { plane_dist2, ..far });
        stack.push(near);
    }
}
