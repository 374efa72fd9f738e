//! Core types for the tridarr workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the allocator and the CLI:
//! the element type and its value rule, grid dimensions, coordinates,
//! the construction frontier, and argument error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod elem;
pub mod error;

pub use dims::{Coord, Dims, Frontier};
pub use elem::{elem_pow, element_value, Elem};
pub use error::{ArgError, ArgName};
