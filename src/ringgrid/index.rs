use std::collections::HashMap;

use crate::error::{GridKnnError, Result};
use crate::finder::NearestFinder;
use crate::ringgrid::ring::{max_radius, RingCells};
use crate::topk::{insert_bounded, worst_accepted};
use crate::r#type::{Neighbor, Point};
use crate::util::{check_dims, check_k, check_point};

/// A finder backed by one slot per grid cell.
///
/// Cell `(x, y)` lives at `x * height + y`. Queries scan concentric square rings around the query
/// cell and stop as soon as no unvisited ring can improve the result. The whole grid is allocated
/// up front, so memory is proportional to `width * height` regardless of how many entries exist.
#[derive(Debug, Clone)]
pub struct RingGridFinder {
    width: u32,
    height: u32,
    pub(super) cells: Vec<Option<u32>>,
    by_id: HashMap<u32, Point>,
}

impl RingGridFinder {
    /// Create an empty finder over a `width x height` grid.
    ///
    /// Fails with [`GridKnnError::GridTooLarge`] if the cell array cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dims(width, height)?;

        let too_large = || GridKnnError::GridTooLarge { width, height };
        let num_cells = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(num_cells).map_err(|_| too_large())?;
        cells.resize(num_cells, None);

        log::debug!(
            "creating ring-grid finder over {}x{} grid ({} cells)",
            width,
            height,
            num_cells
        );
        Ok(Self {
            width,
            height,
            cells,
            by_id: HashMap::new(),
        })
    }

    #[inline]
    pub(super) fn cell_index(&self, point: Point) -> usize {
        point.x as usize * self.height as usize + point.y as usize
    }
}

impl NearestFinder for RingGridFinder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn len(&self) -> usize {
        self.by_id.len()
    }

    fn get(&self, id: u32) -> Option<Point> {
        self.by_id.get(&id).copied()
    }

    fn upsert(&mut self, id: u32, x: i64, y: i64) -> Result<()> {
        let point = check_point(self.width, self.height, x, y)?;
        let index = self.cell_index(point);

        match self.cells[index] {
            Some(occupant) if occupant != id => {
                return Err(GridKnnError::CellOccupied {
                    x: point.x,
                    y: point.y,
                    occupant,
                })
            }
            // already in place
            Some(_) => return Ok(()),
            None => {}
        }

        if let Some(old) = self.by_id.insert(id, point) {
            let old_index = self.cell_index(old);
            self.cells[old_index] = None;
        }
        self.cells[index] = Some(id);
        Ok(())
    }

    fn remove(&mut self, id: u32) -> bool {
        match self.by_id.remove(&id) {
            Some(point) => {
                let index = self.cell_index(point);
                self.cells[index] = None;
                true
            }
            None => false,
        }
    }

    fn find_nearest(&mut self, x: i64, y: i64, k: usize) -> Result<Vec<Neighbor>> {
        let query = check_point(self.width, self.height, x, y)?;
        check_k(k)?;

        let mut result = Vec::with_capacity(k.min(self.by_id.len()));
        let max_r = max_radius(query, self.width, self.height);
        let mut seen = 0;

        for r in 0..=max_r {
            for cell in RingCells::new(query, r, self.width, self.height) {
                if let Some(id) = self.cells[self.cell_index(cell)] {
                    seen += 1;
                    insert_bounded(&mut result, Neighbor::new(id, cell, query.sq_dist(&cell)), k);
                }
            }

            if seen == self.by_id.len() {
                log::trace!("ring {}: every entry visited", r);
                break;
            }

            // Any cell in ring r + 1 or beyond is at least r + 1 away.
            let next_min = (r as u64 + 1).pow(2);
            if worst_accepted(&result, k).is_some_and(|worst| worst < next_min) {
                log::trace!("ring {}: result settled below {}", r, next_min);
                break;
            }
        }

        Ok(result)
    }
}
