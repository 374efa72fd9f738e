//! `tridarr <x> <y> <z>`
//!
//! Allocates an x × y × z ragged array, fills element (i, j, k) with
//! `2^i · 3^j · 5^k`, prints the allocation count and every element, and
//! releases everything. Set `RUST_LOG=debug` (or `trace`) to see the
//! allocation lifecycle on stderr.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};
use tridarr::arena::SystemAllocator;

fn main() -> ExitCode {
    // Silent unless asked, so stderr carries only error messages.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    let mut out = BufWriter::new(io::stdout().lock());
    match tridarr::run(std::env::args_os(), &mut out, &mut SystemAllocator) {
        Ok(summary) => {
            debug!(
                dims = %summary.dims,
                elements = summary.elements,
                released = summary.released,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.status())
        }
    }
}
