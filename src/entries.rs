use std::collections::HashMap;

use crate::error::{GridKnnError, Result};
use crate::r#type::Point;

/// Authoritative id → position table with a cell → id occupancy map beside it.
///
/// Both maps are updated together, so they always agree: every stored point has exactly one
/// occupant and every occupied cell points back at the id that holds it.
#[derive(Debug, Clone, Default)]
pub(crate) struct EntryTable {
    by_id: HashMap<u32, Point>,
    by_cell: HashMap<Point, u32>,
}

impl EntryTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert or move `id` to `point`.
    ///
    /// Returns `Ok(false)` when the id was already at `point` and nothing changed.
    pub(crate) fn upsert(&mut self, id: u32, point: Point) -> Result<bool> {
        if let Some(&occupant) = self.by_cell.get(&point) {
            if occupant != id {
                return Err(GridKnnError::CellOccupied {
                    x: point.x,
                    y: point.y,
                    occupant,
                });
            }
            // The only occupant is this id, so it is already there.
            return Ok(false);
        }

        if let Some(old) = self.by_id.insert(id, point) {
            self.by_cell.remove(&old);
        }
        self.by_cell.insert(point, id);
        Ok(true)
    }

    pub(crate) fn remove(&mut self, id: u32) -> Option<Point> {
        let point = self.by_id.remove(&id)?;
        self.by_cell.remove(&point);
        Some(point)
    }

    pub(crate) fn get(&self, id: u32) -> Option<Point> {
        self.by_id.get(&id).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_id.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (u32, Point)> + '_ {
        self.by_id.iter().map(|(&id, &point)| (id, point))
    }
}
