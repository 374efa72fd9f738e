//! Block addresses within a ragged grid.

use std::fmt;

/// Structural level of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// The single outer block holding one slot per plane.
    Spine,
    /// A per-`i` block holding one slot per row.
    Plane,
    /// A per-`(i, j)` block holding the elements.
    Row,
}

impl Level {
    /// All levels, outermost first.
    pub const ALL: [Level; 3] = [Level::Spine, Level::Plane, Level::Row];

    /// Numeric depth: 0 for the spine, 2 for rows.
    pub fn depth(&self) -> usize {
        match self {
            Self::Spine => 0,
            Self::Plane => 1,
            Self::Row => 2,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spine => f.write_str("spine"),
            Self::Plane => f.write_str("plane"),
            Self::Row => f.write_str("row"),
        }
    }
}

/// Identifies one block of a grid.
///
/// Allocators receive the site with every request and release, which
/// lets tracking and fault-injecting allocators reason about the shape
/// of the structure rather than raw addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockSite {
    /// The level-0 block.
    Spine,
    /// The level-1 block for plane `i`.
    Plane {
        /// Plane index.
        i: usize,
    },
    /// The level-2 block for row `(i, j)`.
    Row {
        /// Plane index.
        i: usize,
        /// Row index within the plane.
        j: usize,
    },
}

impl BlockSite {
    /// The structural level of this block.
    pub fn level(&self) -> Level {
        match self {
            Self::Spine => Level::Spine,
            Self::Plane { .. } => Level::Plane,
            Self::Row { .. } => Level::Row,
        }
    }
}

impl fmt::Display for BlockSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spine => write!(f, "spine"),
            Self::Plane { i } => write!(f, "plane {i}"),
            Self::Row { i, j } => write!(f, "row ({i}, {j})"),
        }
    }
}
