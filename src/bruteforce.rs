//! The linear-scan baseline every other finder is checked against.

use crate::entries::EntryTable;
use crate::error::Result;
use crate::finder::NearestFinder;
use crate::topk::insert_bounded;
use crate::r#type::{Neighbor, Point};
use crate::util::{check_dims, check_k, check_point};

/// A finder that answers every query by scanning all stored entries.
///
/// Queries cost `O(len)`; there is no spatial structure at all. The cell map is only used to
/// detect occupancy conflicts.
#[derive(Debug, Clone)]
pub struct BruteForceFinder {
    width: u32,
    height: u32,
    entries: EntryTable,
}

impl BruteForceFinder {
    /// Create an empty finder over a `width x height` grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dims(width, height)?;
        log::debug!("creating brute-force finder over {}x{} grid", width, height);
        Ok(Self {
            width,
            height,
            entries: EntryTable::new(),
        })
    }
}

impl NearestFinder for BruteForceFinder {
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
        self.entries.upsert(id, point)?;
        Ok(())
    }

    fn remove(&mut self, id: u32) -> bool {
        self.entries.remove(id).is_some()
    }

    fn find_nearest(&mut self, x: i64, y: i64, k: usize) -> Result<Vec<Neighbor>> {
        let query = check_point(self.width, self.height, x, y)?;
        check_k(k)?;

        let mut result = Vec::with_capacity(k.min(self.entries.len()));
        for (id, point) in self.entries.iter() {
            insert_bounded(&mut result, Neighbor::new(id, point, query.sq_dist(&point)), k);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use crate::bruteforce::BruteForceFinder;
    use crate::error::GridKnnError;
    use crate::finder::NearestFinder;
    use crate::r#type::Point;

    #[test]
    fn scans_every_entry() {
        let mut finder = BruteForceFinder::new(5, 5).unwrap();
        finder.upsert(10, 0, 0).unwrap();
        finder.upsert(11, 4, 4).unwrap();
        finder.upsert(12, 0, 4).unwrap();

        let result = finder.find_nearest(4, 0, 3).unwrap();
        let ranked: Vec<(u32, u64)> = result.iter().map(|n| (n.id, n.dist2)).collect();
        // 10 and 11 tie at 16, so the smaller id comes first
        assert_eq!(ranked, vec![(10, 16), (11, 16), (12, 32)]);
    }

    #[test]
    fn move_frees_the_old_cell() {
        let mut finder = BruteForceFinder::new(5, 5).unwrap();
        finder.upsert(1, 2, 2).unwrap();
        finder.upsert(1, 3, 3).unwrap();
        assert_eq!(finder.get(1), Some(Point::new(3, 3)));

        finder.upsert(2, 2, 2).unwrap();
        assert_eq!(
            finder.upsert(1, 2, 2),
            Err(GridKnnError::CellOccupied {
                x: 2,
                y: 2,
                occupant: 2
            })
        );
        assert_eq!(finder.get(1), Some(Point::new(3, 3)));
    }

    #[test]
    fn rejects_bad_queries() {
        let mut finder = BruteForceFinder::new(5, 5).unwrap();
        assert!(matches!(
            finder.find_nearest(5, 0, 1),
            Err(GridKnnError::OutOfBounds { .. })
        ));
        assert_eq!(finder.find_nearest(0, 0, 0), Err(GridKnnError::InvalidK));
        assert!(matches!(
            finder.upsert(1, 0, -1),
            Err(GridKnnError::OutOfBounds { .. })
        ));
        assert!(finder.is_empty());
    }
}
