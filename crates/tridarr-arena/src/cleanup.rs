//! Returning a grid's blocks to its allocator.
//!
//! Release walks the grid in allocation order and frees children before
//! their parent: the rows of plane 0, then plane 0, then the rows of
//! plane 1, and so on, with the spine last. The frontier passed in must
//! describe exactly the blocks present; the grid is consumed, so a grid
//! can be released only once.

use tracing::debug;
use tridarr_core::Frontier;

use crate::alloc::BlockAllocator;
use crate::grid::RaggedGrid;
use crate::site::BlockSite;

/// Counts of blocks handed back by [`release`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReleaseReport {
    /// 1 if the spine was released, 0 otherwise.
    pub spines: usize,
    /// Number of plane blocks released.
    pub planes: usize,
    /// Number of row blocks released.
    pub rows: usize,
}

impl ReleaseReport {
    /// Total number of blocks released.
    pub fn blocks(&self) -> usize {
        self.spines + self.planes + self.rows
    }
}

/// Release every block of `grid` back to `alloc`.
///
/// `frontier` is `(x, y)` for a complete grid, or the point at which
/// construction stopped.
pub fn release<A: BlockAllocator>(
    grid: RaggedGrid,
    frontier: Frontier,
    alloc: &mut A,
) -> ReleaseReport {
    debug_assert!(
        grid.matches_frontier(frontier),
        "frontier {frontier} does not describe grid (actual {})",
        grid.frontier()
    );

    let (dims, mut spine) = grid.into_parts();
    let mut report = ReleaseReport::default();

    for (i, mut plane) in spine.drain(..).enumerate() {
        for (j, row) in plane.drain(..).enumerate() {
            alloc.release(BlockSite::Row { i, j }, row);
            report.rows += 1;
        }
        alloc.release(BlockSite::Plane { i }, plane);
        report.planes += 1;
    }
    alloc.release(BlockSite::Spine, spine);
    report.spines = 1;

    debug!(
        %dims,
        %frontier,
        planes = report.planes,
        rows = report.rows,
        "grid released"
    );
    report
}
