use crate::r#type::Point;

/// Iterator over the in-bounds cells at Chebyshev distance exactly `r` from a center cell.
///
/// Ring 0 is the center alone. Ring `r > 0` is the border of the `(2r + 1) x (2r + 1)` square:
/// first the top and bottom rows (corners included), then the left and right columns without
/// their corners. Cells outside the grid are skipped, so every yielded point is a valid cell.
#[derive(Debug, Clone)]
pub struct RingCells {
    cx: i64,
    cy: i64,
    r: i64,
    width: i64,
    height: i64,
    step: i64,
    total: i64,
}

impl RingCells {
    /// Ring `r` around `center` on a `width x height` grid.
    pub fn new(center: Point, r: u32, width: u32, height: u32) -> Self {
        let r = r as i64;
        Self {
            cx: center.x as i64,
            cy: center.y as i64,
            r,
            width: width as i64,
            height: height as i64,
            step: 0,
            total: if r == 0 { 1 } else { 8 * r },
        }
    }

    /// The cell visited at `step`, which may lie outside the grid.
    #[inline]
    fn cell_at(&self, step: i64) -> (i64, i64) {
        let r = self.r;
        if r == 0 {
            return (self.cx, self.cy);
        }

        let row_cells = 2 * (2 * r + 1);
        if step < row_cells {
            // top and bottom edges, alternating
            let x = self.cx - r + step / 2;
            let y = if step % 2 == 0 { self.cy - r } else { self.cy + r };
            (x, y)
        } else {
            // left and right edges, without corners
            let step = step - row_cells;
            let y = self.cy - r + 1 + step / 2;
            let x = if step % 2 == 0 { self.cx - r } else { self.cx + r };
            (x, y)
        }
    }

    #[inline]
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
}

impl Iterator for RingCells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.step < self.total {
            let (x, y) = self.cell_at(self.step);
            self.step += 1;
            if self.in_bounds(x, y) {
                return Some(Point::new(x as u32, y as u32));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.total - self.step) as usize))
    }
}

/// The largest ring radius around `center` that still contains a grid cell.
#[inline]
pub(crate) fn max_radius(center: Point, width: u32, height: u32) -> u32 {
    let x_reach = center.x.max(width - 1 - center.x);
    let y_reach = center.y.max(height - 1 - center.y);
    x_reach.max(y_reach)
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use crate::ringgrid::ring::{max_radius, RingCells};
    use crate::r#type::Point;

    fn chebyshev(a: Point, b: Point) -> u32 {
        a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
    }

    #[test]
    fn interior_ring_has_8r_distinct_cells() {
        let center = Point::new(10, 10);
        for r in 1..5 {
            let cells: Vec<Point> = RingCells::new(center, r, 30, 30).collect();
            let unique: HashSet<Point> = cells.iter().copied().collect();
            assert_eq!(cells.len(), 8 * r as usize);
            assert_eq!(unique.len(), cells.len());
            assert!(cells.iter().all(|&c| chebyshev(c, center) == r));
        }
    }

    #[test]
    fn ring_zero_is_the_center() {
        let center = Point::new(3, 4);
        let cells: Vec<Point> = RingCells::new(center, 0, 5, 5).collect();
        assert_eq!(cells, vec![center]);
    }

    #[test]
    fn rings_partition_the_grid_from_a_corner() {
        let (width, height) = (7, 4);
        let center = Point::new(0, 3);
        let max_r = max_radius(center, width, height);
        assert_eq!(max_r, 6);

        let mut seen = HashSet::new();
        for r in 0..=max_r {
            for cell in RingCells::new(center, r, width, height) {
                assert!(cell.x < width && cell.y < height);
                assert_eq!(chebyshev(cell, center), r);
                assert!(seen.insert(cell), "cell {:?} visited twice", cell);
            }
        }
        assert_eq!(seen.len(), (width * height) as usize);
    }

    #[test]
    fn single_cell_grid() {
        let center = Point::new(0, 0);
        assert_eq!(max_radius(center, 1, 1), 0);
        assert_eq!(RingCells::new(center, 0, 1, 1).count(), 1);
        assert_eq!(RingCells::new(center, 1, 1, 1).count(), 0);
    }
}
