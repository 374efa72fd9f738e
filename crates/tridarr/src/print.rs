//! Text output.

use std::io::{self, Write};

use tridarr_arena::RaggedGrid;

/// Write the allocation report line.
pub fn write_allocations<W: Write>(out: &mut W, allocations: usize) -> io::Result<()> {
    writeln!(out, "successfully allocated {allocations} times")
}

/// Write one `arr[i][j][k] = value` line per element, row-major.
///
/// Stops at the first write error. Returns the number of lines written.
pub fn write_grid<W: Write>(out: &mut W, grid: &RaggedGrid) -> io::Result<usize> {
    let mut lines = 0;
    for (coord, value) in grid.iter() {
        writeln!(out, "arr{coord} = {value}")?;
        lines += 1;
    }
    Ok(lines)
}
