use std::cmp::Ordering;

use geo_traits::CoordTrait;

/// A cell position on the grid.
///
/// Coordinates are always validated against the grid bounds before a `Point` is stored, so the
/// fields of any point held by a finder satisfy `x < width` and `y < height`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to another point.
    #[inline]
    pub fn sq_dist(&self, other: &Point) -> u64 {
        sq_dist(self.x, self.y, other.x, other.y)
    }

    /// The coordinate along `axis`: 0 for x, 1 for y.
    #[inline]
    pub(crate) fn axis_value(&self, axis: usize) -> u32 {
        if axis == 0 {
            self.x
        } else {
            self.y
        }
    }

    /// The coordinate perpendicular to `axis`.
    #[inline]
    pub(crate) fn other_value(&self, axis: usize) -> u32 {
        self.axis_value(1 - axis)
    }
}

impl CoordTrait for Point {
    type T = u32;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// One entry of a nearest-neighbor query result.
///
/// This is a snapshot: it copies the id and position of the matched entry and keeps no link back
/// into the finder that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    /// Squared euclidean distance to the query point.
    pub dist2: u64,
}

impl Neighbor {
    pub fn new(id: u32, point: Point, dist2: u64) -> Self {
        Self {
            id,
            x: point.x,
            y: point.y,
            dist2,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The ranking key: distance first, id as the tie-break.
    #[inline]
    pub fn rank(&self) -> (u64, u32) {
        (self.dist2, self.id)
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.point().cmp(&other.point()))
    }
}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[inline]
pub(crate) fn sq_dist(ax: u32, ay: u32, bx: u32, by: u32) -> u64 {
    let dx = ax.abs_diff(bx) as u64;
    let dy = ay.abs_diff(by) as u64;
    dx * dx + dy * dy
}
