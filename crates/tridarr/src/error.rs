//! The top-level error type.
//!
//! Every failure the program can hit is one of four classes. Each renders
//! to exactly what is written to stderr, and all map to exit status 1.

use std::error::Error;
use std::fmt;
use std::io;

use tridarr_arena::AllocError;
use tridarr_core::ArgError;

/// Exit status for every failure class.
pub const EXIT_FAILURE: u8 = 1;

/// A failed run.
#[derive(Debug)]
pub enum RunError {
    /// The argument count is not three.
    Usage {
        /// Invocation name, or a placeholder when unavailable.
        program: String,
    },
    /// A size argument was malformed, negative or out of range.
    Arg(ArgError),
    /// A block could not be allocated. Everything allocated before it has
    /// already been released.
    Allocation {
        /// The refused request.
        source: AllocError,
        /// Successful allocations before the failure.
        allocations: usize,
        /// Failure writing the partial allocation count, if any.
        output: Option<io::Error>,
    },
    /// Writing to stdout failed. The grid has already been released.
    Output(io::Error),
}

impl RunError {
    /// Process exit status for this error.
    pub fn status(&self) -> u8 {
        EXIT_FAILURE
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage { program } => {
                write!(f, "wrong usage!\nusage: {program} <x> <y> <z>")
            }
            Self::Arg(err) => write!(f, "{err}"),
            Self::Allocation { source, output, .. } => {
                write!(f, "array allocation: {source}")?;
                match output {
                    Some(err) => write!(f, "\nvalue output: {err}"),
                    None => Ok(()),
                }
            }
            Self::Output(err) => write!(f, "value output: {err}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Usage { .. } => None,
            Self::Arg(err) => Some(err),
            Self::Allocation { source, .. } => Some(source),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<ArgError> for RunError {
    fn from(err: ArgError) -> Self {
        Self::Arg(err)
    }
}
