//! The capability shared by every finder, and a tagged variant to pick one at runtime.

use std::fmt;
use std::str::FromStr;

use geo_traits::CoordTrait;
use num_traits::PrimInt;

use crate::bruteforce::BruteForceFinder;
use crate::error::{GridKnnError, Result};
use crate::kdtree::KdTreeFinder;
use crate::ringgrid::RingGridFinder;
use crate::r#type::{Neighbor, Point};
use crate::util::coord_to_i64;

/// The default number of neighbors a host should ask for.
pub const DEFAULT_K: usize = 5;

/// A mutable point-location index over a fixed `width x height` integer grid.
///
/// All implementations are interchangeable: for the same sequence of calls they return exactly
/// the same results, ordered ascending by `(dist2, id)`.
///
/// Queries take `&mut self` because an implementation may lazily refresh internal structures
/// before answering. No implementation synchronizes internally; wrap a finder in a lock to share
/// it.
pub trait NearestFinder {
    /// The grid extent along x.
    fn width(&self) -> u32;

    /// The grid extent along y.
    fn height(&self) -> u32;

    /// The number of stored entries.
    fn len(&self) -> usize;

    /// Whether no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current position of `id`, if stored.
    fn get(&self, id: u32) -> Option<Point>;

    /// Insert `id` at `(x, y)`, or move it there if it already exists.
    ///
    /// Fails with [`GridKnnError::OutOfBounds`] for a position outside the grid and with
    /// [`GridKnnError::CellOccupied`] if a different id holds the destination cell. Upserting an
    /// id to the cell it already occupies is a no-op.
    fn upsert(&mut self, id: u32, x: i64, y: i64) -> Result<()>;

    /// Remove `id`. Returns `false` if it was not stored.
    fn remove(&mut self, id: u32) -> bool;

    /// The up to `k` entries closest to `(x, y)`, ascending by `(dist2, id)`.
    fn find_nearest(&mut self, x: i64, y: i64, k: usize) -> Result<Vec<Neighbor>>;

    /// [`NearestFinder::upsert`] taking any integer coordinate.
    fn upsert_coord<T: PrimInt>(&mut self, id: u32, coord: &impl CoordTrait<T = T>) -> Result<()>
    where
        Self: Sized,
    {
        self.upsert(id, coord_to_i64(coord.x())?, coord_to_i64(coord.y())?)
    }

    /// [`NearestFinder::find_nearest`] taking any integer coordinate.
    fn find_nearest_coord<T: PrimInt>(
        &mut self,
        coord: &impl CoordTrait<T = T>,
        k: usize,
    ) -> Result<Vec<Neighbor>>
    where
        Self: Sized,
    {
        self.find_nearest(coord_to_i64(coord.x())?, coord_to_i64(coord.y())?, k)
    }
}

/// Which search strategy an [`AnyFinder`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinderKind {
    /// Linear scan over every entry.
    BruteForce,
    /// Dense grid searched in expanding square rings.
    RingGrid,
    /// Balanced 2-d tree, rebuilt lazily after mutations.
    KdTree,
}

impl FinderKind {
    /// Every kind, in a fixed order.
    pub const ALL: [FinderKind; 3] = [
        FinderKind::BruteForce,
        FinderKind::RingGrid,
        FinderKind::KdTree,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FinderKind::BruteForce => "brute-force",
            FinderKind::RingGrid => "ring-grid",
            FinderKind::KdTree => "kd-tree",
        }
    }
}

impl fmt::Display for FinderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinderKind {
    type Err = GridKnnError;

    fn from_str(s: &str) -> Result<Self> {
        FinderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GridKnnError::UnknownFinder(s.to_string()))
    }
}

/// A finder whose strategy is chosen at construction time.
#[derive(Debug, Clone)]
pub enum AnyFinder {
    BruteForce(BruteForceFinder),
    RingGrid(RingGridFinder),
    KdTree(KdTreeFinder),
}

impl AnyFinder {
    /// Create an empty finder of the given kind over a `width x height` grid.
    pub fn new(kind: FinderKind, width: u32, height: u32) -> Result<Self> {
        Ok(match kind {
            FinderKind::BruteForce => AnyFinder::BruteForce(BruteForceFinder::new(width, height)?),
            FinderKind::RingGrid => AnyFinder::RingGrid(RingGridFinder::new(width, height)?),
            FinderKind::KdTree => AnyFinder::KdTree(KdTreeFinder::new(width, height)?),
        })
    }

    pub fn kind(&self) -> FinderKind {
        match self {
            AnyFinder::BruteForce(_) => FinderKind::BruteForce,
            AnyFinder::RingGrid(_) => FinderKind::RingGrid,
            AnyFinder::KdTree(_) => FinderKind::KdTree,
        }
    }

    fn inner(&self) -> &dyn NearestFinder {
        match self {
            AnyFinder::BruteForce(f) => f,
            AnyFinder::RingGrid(f) => f,
            AnyFinder::KdTree(f) => f,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn NearestFinder {
        match self {
            AnyFinder::BruteForce(f) => f,
            AnyFinder::RingGrid(f) => f,
            AnyFinder::KdTree(f) => f,
        }
    }
}

impl NearestFinder for AnyFinder {
    fn width(&self) -> u32 {
        self.inner().width()
    }

    fn height(&self) -> u32 {
        self.inner().height()
    }

    fn len(&self) -> usize {
        self.inner().len()
    }

    fn get(&self, id: u32) -> Option<Point> {
        self.inner().get(id)
    }

    fn upsert(&mut self, id: u32, x: i64, y: i64) -> Result<()> {
        self.inner_mut().upsert(id, x, y)
    }

    fn remove(&mut self, id: u32) -> bool {
        self.inner_mut().remove(id)
    }

    fn find_nearest(&mut self, x: i64, y: i64, k: usize) -> Result<Vec<Neighbor>> {
        self.inner_mut().find_nearest(x, y, k)
    }
}

#[cfg(test)]
mod test {
    use geo_traits::CoordTrait;

    use crate::error::GridKnnError;
    use crate::finder::{AnyFinder, FinderKind, NearestFinder, DEFAULT_K};

    /// A coordinate type from "another crate".
    struct Coord<T>(T, T);

    impl<T: Copy> CoordTrait for Coord<T> {
        type T = T;

        fn dim(&self) -> geo_traits::Dimensions {
            geo_traits::Dimensions::Xy
        }

        fn x(&self) -> T {
            self.0
        }

        fn y(&self) -> T {
            self.1
        }

        fn nth_or_panic(&self, n: usize) -> T {
            match n {
                0 => self.0,
                1 => self.1,
                _ => panic!("Invalid index of coord"),
            }
        }
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in FinderKind::ALL {
            assert_eq!(kind.to_string().parse::<FinderKind>(), Ok(kind));
        }
        assert_eq!("KD-Tree".parse::<FinderKind>(), Ok(FinderKind::KdTree));
        assert_eq!(
            "octree".parse::<FinderKind>(),
            Err(GridKnnError::UnknownFinder("octree".to_string()))
        );
    }

    #[test]
    fn any_finder_dispatches() {
        for kind in FinderKind::ALL {
            let mut finder = AnyFinder::new(kind, 8, 6).unwrap();
            assert_eq!(finder.kind(), kind);
            assert_eq!((finder.width(), finder.height()), (8, 6));

            finder.upsert(3, 1, 1).unwrap();
            finder.upsert(4, 7, 5).unwrap();
            assert_eq!(finder.len(), 2);

            let result = finder.find_nearest(0, 0, DEFAULT_K).unwrap();
            let ids: Vec<u32> = result.iter().map(|n| n.id).collect();
            assert_eq!(ids, vec![3, 4]);

            assert!(finder.remove(3));
            assert!(!finder.remove(3));
            assert_eq!(finder.find_nearest(0, 0, 1).unwrap()[0].id, 4);
        }
    }

    #[test]
    fn any_finder_rejects_empty_grid() {
        for kind in FinderKind::ALL {
            assert!(matches!(
                AnyFinder::new(kind, 0, 10),
                Err(GridKnnError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn coord_methods_accept_foreign_coords() {
        let mut finder = AnyFinder::new(FinderKind::KdTree, 10, 10).unwrap();
        finder.upsert_coord(1, &Coord(2u16, 3u16)).unwrap();
        finder.upsert_coord(2, &Coord(9i32, 9i32)).unwrap();

        let result = finder.find_nearest_coord(&Coord(3u8, 3u8), 1).unwrap();
        assert_eq!(result[0].id, 1);
        assert_eq!(result[0].dist2, 1);

        assert!(matches!(
            finder.upsert_coord(3, &Coord(-1i64, 0i64)),
            Err(GridKnnError::OutOfBounds { .. })
        ));
        assert_eq!(
            finder.find_nearest_coord(&Coord(u64::MAX, 0u64), 1),
            Err(GridKnnError::InvalidCoordinate)
        );
    }
}
