//! tridarr: allocate a ragged three-dimensional array, fill it, print it,
//! and release it, surviving allocation failure at any depth.
//!
//! This is the top-level crate. It re-exports the sub-crates and adds the
//! command-line pieces: argument resolution ([`args`]), output
//! ([`print`]), and the single entry point [`run()`] that ties the phases
//! together and propagates every failure as a [`RunError`].
//!
//! # Quick start
//!
//! ```rust
//! use tridarr::prelude::*;
//!
//! let mut out = Vec::new();
//! let summary = execute(Dims::new(2, 2, 2), &mut out, &mut SystemAllocator).unwrap();
//! assert_eq!(summary.allocations, 7);
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("successfully allocated 7 times\n"));
//! assert!(text.ends_with("arr[1][1][1] = 30\n"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tridarr-core` | `Elem`, `Dims`, `Coord`, `Frontier`, value rule |
//! | [`arena`] | `tridarr-arena` | Allocators, `RaggedGrid`, builder, cleanup |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Block allocation, grid construction and release (`tridarr-arena`).
pub use tridarr_arena as arena;

/// Core types and the element value rule (`tridarr-core`).
pub use tridarr_core as types;

pub mod args;
pub mod error;
pub mod print;
pub mod run;

pub use error::RunError;
pub use run::{execute, run, RunSummary};

/// Common imports for typical tridarr usage.
pub mod prelude {
    pub use tridarr_arena::{
        build, release, BlockAllocator, BlockSite, RaggedGrid, ReleaseReport, SystemAllocator,
    };
    pub use tridarr_core::{element_value, Coord, Dims, Elem, Frontier};

    pub use crate::error::RunError;
    pub use crate::run::{execute, run, RunSummary};
}
