//! Incremental construction of a [`RaggedGrid`].
//!
//! Blocks are requested outermost first: the spine, then for each plane
//! the plane block followed by its rows. Each row is filled as soon as it
//! is allocated. On the first refusal the builder stops and returns a
//! [`BuildFailure`] that owns whatever was already built, together with
//! the frontier and the number of successful allocations.

use std::error::Error;
use std::fmt;

use tracing::{debug, trace};
use tridarr_core::{elem_pow, Dims, Frontier};

use crate::alloc::BlockAllocator;
use crate::cleanup::{release, ReleaseReport};
use crate::error::AllocError;
use crate::grid::{Plane, RaggedGrid, Row};
use crate::site::BlockSite;

/// A fully built and populated grid.
#[derive(Debug)]
pub struct Built {
    /// The complete grid.
    pub grid: RaggedGrid,
    /// Number of successful allocations: `1 + x + x · y`.
    pub allocations: usize,
}

/// Construction stopped at an allocation failure.
#[derive(Debug)]
pub struct BuildFailure {
    /// Blocks allocated before the failure. `None` when the spine itself
    /// could not be allocated.
    pub partial: Option<RaggedGrid>,
    /// Number of successful allocations before the failure.
    pub allocations: usize,
    /// Progress at the point of failure.
    pub frontier: Frontier,
    /// The refused request.
    pub source: AllocError,
}

impl BuildFailure {
    /// The block whose allocation failed.
    pub fn site(&self) -> BlockSite {
        self.source.site()
    }

    /// Hand every partially built block back to `alloc`.
    pub fn release<A: BlockAllocator>(self, alloc: &mut A) -> ReleaseReport {
        match self.partial {
            Some(grid) => release(grid, self.frontier, alloc),
            None => ReleaseReport::default(),
        }
    }
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid construction stopped at {} after {} allocations: {}",
            self.frontier, self.allocations, self.source
        )
    }
}

impl Error for BuildFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Allocate and populate a grid of `dims`.
///
/// Element `(i, j, k)` holds `2^i · 3^j · 5^k` modulo 2^64.
pub fn build<A: BlockAllocator>(dims: Dims, alloc: &mut A) -> Result<Built, BuildFailure> {
    let mut allocations = 0;

    let mut spine: Vec<Plane> = match alloc.allocate(BlockSite::Spine, dims.x) {
        Ok(spine) => spine,
        Err(source) => {
            debug!(%dims, error = %source, "spine allocation failed");
            return Err(BuildFailure {
                partial: None,
                allocations,
                frontier: Frontier::START,
                source,
            });
        }
    };
    allocations += 1;
    trace!(len = dims.x, "allocated spine");

    for i in 0..dims.x {
        let plane: Plane = match alloc.allocate(BlockSite::Plane { i }, dims.y) {
            Ok(plane) => plane,
            Err(source) => return Err(fail(dims, spine, Frontier::new(i, 0), allocations, source)),
        };
        allocations += 1;
        spine.push(plane);

        for j in 0..dims.y {
            let mut row: Row = match alloc.allocate(BlockSite::Row { i, j }, dims.z) {
                Ok(row) => row,
                Err(source) => {
                    return Err(fail(dims, spine, Frontier::new(i, j), allocations, source))
                }
            };
            allocations += 1;
            fill_row(&mut row, i, j, dims.z);
            spine[i].push(row);
        }
        trace!(i, allocations, "plane complete");
    }

    debug!(%dims, allocations, "grid built");
    Ok(Built {
        grid: RaggedGrid::from_spine(dims, spine),
        allocations,
    })
}

fn fail(
    dims: Dims,
    spine: Vec<Plane>,
    frontier: Frontier,
    allocations: usize,
    source: AllocError,
) -> BuildFailure {
    debug!(%dims, %frontier, allocations, error = %source, "allocation failed");
    BuildFailure {
        partial: Some(RaggedGrid::from_spine(dims, spine)),
        allocations,
        frontier,
        source,
    }
}

/// Append the `z` elements of row `(i, j)`.
///
/// The `2^i · 3^j` prefix is shared by the whole row; wrapping
/// multiplication keeps the result identical to computing each element
/// from scratch.
fn fill_row(row: &mut Row, i: usize, j: usize, z: usize) {
    let prefix = elem_pow(2, i).wrapping_mul(elem_pow(3, j));
    row.extend((0..z).map(|k| prefix.wrapping_mul(elem_pow(5, k))));
}
