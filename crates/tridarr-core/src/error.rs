//! Argument error types.
//!
//! Parse failures name the offending argument (`x`, `y` or `z`) so the
//! rendered message points the user at the right position.

use std::error::Error;
use std::fmt;

/// Which of the three size arguments an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgName {
    /// Plane count.
    X,
    /// Rows per plane.
    Y,
    /// Elements per row.
    Z,
}

impl ArgName {
    /// All argument names in command-line order.
    pub const ALL: [ArgName; 3] = [ArgName::X, ArgName::Y, ArgName::Z];

    /// The name as it appears in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for ArgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A size argument that could not be turned into a dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgError {
    /// The argument starts with a minus sign.
    Negative {
        /// The offending argument.
        name: ArgName,
    },
    /// The argument is empty, has no digits, or carries trailing garbage.
    Unparseable {
        /// The offending argument.
        name: ArgName,
    },
    /// The value does not fit in a `usize`.
    TooLarge {
        /// The offending argument.
        name: ArgName,
    },
}

impl ArgError {
    /// The argument this error refers to.
    pub fn name(&self) -> ArgName {
        match self {
            Self::Negative { name } | Self::Unparseable { name } | Self::TooLarge { name } => *name,
        }
    }
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { name } => write!(f, "argument {name} must be positive"),
            Self::Unparseable { name } => write!(f, "failed to parse argument {name}"),
            Self::TooLarge { name } => write!(f, "argument {name} is too large"),
        }
    }
}

impl Error for ArgError {}
