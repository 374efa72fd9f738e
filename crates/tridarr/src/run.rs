//! The program's phases, end to end.
//!
//! [`run`] resolves arguments and hands off to [`execute`], which builds,
//! reports, prints and releases. Whatever goes wrong, the grid (complete
//! or partial) is released before the error is returned, so the caller
//! only has to render the error and pick an exit status.

use std::io::Write;

use tracing::debug;
use tridarr_arena::{build, release, BlockAllocator, Built};
use tridarr_core::Dims;

use crate::args;
use crate::error::RunError;
use crate::print::{write_allocations, write_grid};

/// What a successful run did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Resolved dimensions.
    pub dims: Dims,
    /// Successful allocations, `1 + x + x · y`.
    pub allocations: usize,
    /// Element lines written.
    pub elements: usize,
    /// Blocks released afterwards.
    pub released: usize,
}

/// Resolve `args` (program name first) and execute.
pub fn run<I, W, A>(args: I, out: &mut W, alloc: &mut A) -> Result<RunSummary, RunError>
where
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString>,
    W: Write,
    A: BlockAllocator,
{
    let dims = args::resolve(args)?;
    debug!(%dims, "resolved dimensions");
    execute(dims, out, alloc)
}

/// Build a grid of `dims`, report the allocation count, print every
/// element, and release the grid.
///
/// On allocation failure the count reached so far is still written to
/// `out` and the partial grid is released. A failure to write that count
/// travels with the allocation error.
pub fn execute<W, A>(dims: Dims, out: &mut W, alloc: &mut A) -> Result<RunSummary, RunError>
where
    W: Write,
    A: BlockAllocator,
{
    let Built { grid, allocations } = match build(dims, alloc) {
        Ok(built) => built,
        Err(failure) => {
            let allocations = failure.allocations;
            let source = failure.source;
            let output = write_allocations(out, allocations)
                .and_then(|()| out.flush())
                .err();
            let report = failure.release(alloc);
            debug!(allocations, released = report.blocks(), "partial grid released");
            return Err(RunError::Allocation {
                source,
                allocations,
                output,
            });
        }
    };

    let printed = write_allocations(out, allocations)
        .and_then(|()| write_grid(out, &grid))
        .and_then(|elements| out.flush().map(|()| elements));
    let report = release(grid, dims.complete_frontier(), alloc);
    let elements = printed.map_err(RunError::Output)?;

    Ok(RunSummary {
        dims,
        allocations,
        elements,
        released: report.blocks(),
    })
}
