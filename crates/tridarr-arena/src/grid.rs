//! The ragged three-level grid.

use tridarr_core::{Coord, Dims, Elem, Frontier};

/// Level-2 block: the `z` elements of one `(i, j)` pair.
pub type Row = Vec<Elem>;

/// Level-1 block: the rows of one plane.
pub type Plane = Vec<Row>;

/// A possibly partial ragged grid.
///
/// The grid exclusively owns its spine, the spine owns its planes and
/// each plane owns its rows. Blocks are only ever appended in row-major
/// order, so the set of blocks present is always described by a single
/// [`Frontier`].
#[derive(Debug)]
pub struct RaggedGrid {
    dims: Dims,
    spine: Vec<Plane>,
}

impl RaggedGrid {
    /// Wrap a spine produced by the builder.
    pub(crate) fn from_spine(dims: Dims, spine: Vec<Plane>) -> Self {
        Self { dims, spine }
    }

    /// Split the grid back into its spine for release.
    pub(crate) fn into_parts(self) -> (Dims, Vec<Plane>) {
        (self.dims, self.spine)
    }

    /// Declared dimensions.
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// The frontier describing which blocks exist.
    ///
    /// A plane that is complete but not followed by another plane is
    /// reported as the start of the next one, `(i + 1, 0)`, except for a
    /// complete grid, which is always `(x, y)`.
    pub fn frontier(&self) -> Frontier {
        let Dims { x, y, .. } = self.dims;
        let started = self.spine.len();
        match self.spine.last() {
            None if x == 0 => self.dims.complete_frontier(),
            None => Frontier::START,
            Some(last) if last.len() < y => Frontier::new(started - 1, last.len()),
            Some(_) if started == x => self.dims.complete_frontier(),
            Some(_) => Frontier::new(started, 0),
        }
    }

    /// Whether the blocks present are exactly those `frontier` describes.
    ///
    /// Both spellings of a completed plane, `(i, y)` and `(i + 1, 0)`,
    /// are accepted.
    pub fn matches_frontier(&self, frontier: Frontier) -> bool {
        let y = self.dims.y;
        let Frontier { i, j } = frontier;
        if j > y || self.spine.len() > i.saturating_add(1) {
            return false;
        }
        self.spine.iter().enumerate().all(|(idx, plane)| {
            if idx < i {
                plane.len() == y
            } else {
                plane.len() == j
            }
        })
    }

    /// Whether every block of the declared dimensions exists.
    pub fn is_complete(&self) -> bool {
        self.frontier().is_complete(self.dims)
    }

    /// Number of blocks owned, spine included.
    pub fn block_count(&self) -> usize {
        1 + self.spine.len() + self.spine.iter().map(Vec::len).sum::<usize>()
    }

    /// The elements of row `(i, j)`, if it has been allocated.
    pub fn row(&self, i: usize, j: usize) -> Option<&[Elem]> {
        self.spine.get(i)?.get(j).map(Vec::as_slice)
    }

    /// The element at `coord`, if its row has been allocated.
    pub fn get(&self, coord: Coord) -> Option<Elem> {
        self.row(coord.i, coord.j)?.get(coord.k).copied()
    }

    /// Iterate every present element in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Elem)> + '_ {
        self.spine.iter().enumerate().flat_map(|(i, plane)| {
            plane.iter().enumerate().flat_map(move |(j, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(k, &value)| (Coord::new(i, j, k), value))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(dims: Dims, plane_rows: &[usize]) -> RaggedGrid {
        let spine = plane_rows
            .iter()
            .map(|&rows| (0..rows).map(|_| vec![0; dims.z]).collect())
            .collect();
        RaggedGrid::from_spine(dims, spine)
    }

    #[test]
    fn empty_spine_frontier() {
        assert_eq!(grid_with(Dims::new(3, 2, 1), &[]).frontier(), Frontier::START);
        assert_eq!(
            grid_with(Dims::new(0, 2, 1), &[]).frontier(),
            Frontier::new(0, 2)
        );
    }

    #[test]
    fn partial_plane_frontier() {
        let grid = grid_with(Dims::new(3, 4, 1), &[4, 2]);
        assert_eq!(grid.frontier(), Frontier::new(1, 2));
        assert!(!grid.is_complete());
        assert_eq!(grid.block_count(), 1 + 2 + 6);
    }

    #[test]
    fn completed_plane_reports_next_plane() {
        let grid = grid_with(Dims::new(3, 4, 1), &[4, 4]);
        assert_eq!(grid.frontier(), Frontier::new(2, 0));
        assert!(grid.matches_frontier(Frontier::new(2, 0)));
        assert!(grid.matches_frontier(Frontier::new(1, 4)));
    }

    #[test]
    fn complete_grid_frontier() {
        let grid = grid_with(Dims::new(2, 3, 1), &[3, 3]);
        assert_eq!(grid.frontier(), Frontier::new(2, 3));
        assert!(grid.is_complete());
        assert!(grid.matches_frontier(Frontier::new(2, 3)));
    }

    #[test]
    fn zero_rows_per_plane_is_complete_after_x_planes() {
        let grid = grid_with(Dims::new(3, 0, 5), &[0, 0, 0]);
        assert_eq!(grid.frontier(), Frontier::new(3, 0));
        assert!(grid.is_complete());
        assert_eq!(grid.block_count(), 4);
    }

    #[test]
    fn mismatched_frontier_rejected() {
        let grid = grid_with(Dims::new(3, 4, 1), &[4, 2]);
        assert!(grid.matches_frontier(Frontier::new(1, 2)));
        assert!(!grid.matches_frontier(Frontier::new(1, 3)));
        assert!(!grid.matches_frontier(Frontier::new(0, 4)));
        assert!(!grid.matches_frontier(Frontier::new(2, 0)));
        assert!(!grid.matches_frontier(Frontier::new(1, 5)));
    }

    #[test]
    fn accessors_on_partial_grid() {
        let grid = grid_with(Dims::new(2, 2, 3), &[2, 1]);
        assert_eq!(grid.row(1, 0).map(<[Elem]>::len), Some(3));
        assert_eq!(grid.row(1, 1), None);
        assert_eq!(grid.get(Coord::new(0, 1, 2)), Some(0));
        assert_eq!(grid.get(Coord::new(0, 1, 3)), None);
        assert_eq!(grid.iter().count(), 9);
    }
}
