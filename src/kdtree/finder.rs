use crate::entries::EntryTable;
use crate::error::Result;
use crate::finder::NearestFinder;
use crate::kdtree::{KDTree, KDTreeBuilder};
use crate::r#type::{Neighbor, Point};
use crate::util::{check_dims, check_k, check_point};

/// A finder that answers queries from a [`KDTree`] rebuilt on demand.
///
/// Mutations only touch the entry table and mark the tree stale. The next query rebuilds the
/// whole tree from the current entries before searching it, so a query never observes an
/// outdated tree.
#[derive(Debug, Clone)]
pub struct KdTreeFinder {
    width: u32,
    height: u32,
    entries: EntryTable,
    /// `None` while stale. A present tree always reflects `entries`.
    tree: Option<KDTree>,
}

impl KdTreeFinder {
    /// Create an empty finder over a `width x height` grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dims(width, height)?;
        log::debug!("creating kd-tree finder over {}x{} grid", width, height);
        Ok(Self {
            width,
            height,
            entries: EntryTable::new(),
            tree: None,
        })
    }

    /// Whether the next query will rebuild the tree.
    pub fn is_stale(&self) -> bool {
        self.tree.is_none()
    }

    /// The current tree, rebuilding it first if stale.
    pub fn tree(&mut self) -> &KDTree {
        let entries = &self.entries;
        self.tree.get_or_insert_with(|| build(entries))
    }
}

fn build(entries: &EntryTable) -> KDTree {
    log::debug!("rebuilding kd-tree over {} entries", entries.len());
    let mut builder = KDTreeBuilder::new(entries.len());
    for (id, point) in entries.iter() {
        builder.add(id, point);
    }
    builder.finish()
}

impl NearestFinder for KdTreeFinder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, id: u32) -> Option<Point> {
        self.entries.get(id)
    }

    fn upsert(&mut self, id: u32, x: i64, y: i64) -> Result<()> {
        let point = check_point(self.width, self.height, x, y)?;
        if self.entries.upsert(id, point)? {
            self.tree = None;
        }
        Ok(())
    }

    fn remove(&mut self, id: u32) -> bool {
        let removed = self.entries.remove(id).is_some();
        if removed {
            self.tree = None;
        }
        removed
    }

    fn find_nearest(&mut self, x: i64, y: i64, k: usize) -> Result<Vec<Neighbor>> {
        let query = check_point(self.width, self.height, x, y)?;
        check_k(k)?;
        Ok(self.tree().nearest(query, k))
    }
}
