//! Grid dimensions, element coordinates, and the construction frontier.

use std::fmt;

/// Extents of a three-dimensional grid.
///
/// `x` is the outer (plane) axis, `y` the middle (row) axis and `z` the
/// inner (element) axis. Any extent may be zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    /// Number of planes.
    pub x: usize,
    /// Number of rows per plane.
    pub y: usize,
    /// Number of elements per row.
    pub z: usize,
}

impl Dims {
    /// Create a new set of dimensions.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Number of blocks a complete ragged grid owns: one spine, `x` planes
    /// and `x · y` rows.
    ///
    /// Returns `None` if the count does not fit in a `usize`.
    pub fn expected_allocations(&self) -> Option<usize> {
        self.x.checked_mul(self.y)?.checked_add(self.x)?.checked_add(1)
    }

    /// Total number of elements, `x · y · z`, or `None` on overflow.
    pub fn element_count(&self) -> Option<usize> {
        self.x.checked_mul(self.y)?.checked_mul(self.z)
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.i < self.x && coord.j < self.y && coord.k < self.z
    }

    /// The frontier of a fully allocated grid, `(x, y)`.
    pub fn complete_frontier(&self) -> Frontier {
        Frontier::new(self.x, self.y)
    }

    /// Iterate every coordinate in row-major order (i slowest, k fastest).
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let Dims { x, y, z } = *self;
        (0..x).flat_map(move |i| (0..y).flat_map(move |j| (0..z).map(move |k| Coord::new(i, j, k))))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

/// Address of a single element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Plane index.
    pub i: usize,
    /// Row index within the plane.
    pub j: usize,
    /// Element index within the row.
    pub k: usize,
}

impl Coord {
    /// Create a new coordinate.
    pub const fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}][{}]", self.i, self.j, self.k)
    }
}

/// Progress marker for incremental construction.
///
/// A frontier `(i, j)` states that every plane below `i` is complete
/// (all `y` rows allocated), that plane `i`, if it exists, holds exactly
/// `j` rows, and that nothing beyond exists. `(x, y)` marks a fully
/// allocated grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Frontier {
    /// Index of the plane whose allocation is in progress.
    pub i: usize,
    /// Number of rows allocated in plane `i`.
    pub j: usize,
}

impl Frontier {
    /// The frontier before any plane has been allocated.
    pub const START: Frontier = Frontier { i: 0, j: 0 };

    /// Create a new frontier.
    pub const fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Whether this frontier marks a fully allocated grid of `dims`.
    pub fn is_complete(&self, dims: Dims) -> bool {
        *self == dims.complete_frontier()
    }
}

impl fmt::Display for Frontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}
