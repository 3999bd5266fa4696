use crate::kdtree::index::{KDItem, KDTree};
use crate::r#type::Point;

/// A builder to create a [`KDTree`].
///
/// ```
/// use grid_knn::kdtree::KDTreeBuilder;
/// use grid_knn::Point;
///
/// let mut builder = KDTreeBuilder::new(3);
/// builder.add(7, Point::new(0, 0));
/// builder.add(8, Point::new(5, 1));
/// builder.add(9, Point::new(2, 9));
/// let tree = builder.finish();
/// assert_eq!(tree.nearest(Point::new(4, 1), 1)[0].id, 8);
/// ```
#[derive(Debug, Clone)]
pub struct KDTreeBuilder {
    items: Vec<KDItem>,
    num_items: usize,
}

impl KDTreeBuilder {
    /// Create a new builder expecting exactly `num_items` points.
    pub fn new(num_items: usize) -> Self {
        Self {
            items: Vec::with_capacity(num_items),
            num_items,
        }
    }

    /// Add a point with its id. Returns the insertion index.
    pub fn add(&mut self, id: u32, point: Point) -> usize {
        let index = self.items.len();
        self.items.push(KDItem { id, point });
        index
    }

    /// Consume this builder, performing the k-d sort and generating a tree ready for queries.
    pub fn finish(mut self) -> KDTree {
        assert_eq!(
            self.items.len(),
            self.num_items,
            "Added {} items when expected {}.",
            self.items.len(),
            self.num_items
        );

        sort(&mut self.items, 0);
        KDTree { items: self.items }
    }
}

/// Recursively place the median of `items` on `axis` in the middle, then do the same for both
/// halves on the other axis.
///
/// The median is the element at `len / 2` when ordered by `(axis value, other value, id)`. That
/// key is unique, so selecting it gives exactly the tree a full sort at every level would give.
fn sort(items: &mut [KDItem], axis: usize) {
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    items.select_nth_unstable_by_key(mid, |item| sort_key(item, axis));

    let (left, rest) = items.split_at_mut(mid);
    sort(left, 1 - axis);
    sort(&mut rest[1..], 1 - axis);
}

#[inline]
fn sort_key(item: &KDItem, axis: usize) -> (u32, u32, u32) {
    (
        item.point.axis_value(axis),
        item.point.other_value(axis),
        item.id,
    )
}
