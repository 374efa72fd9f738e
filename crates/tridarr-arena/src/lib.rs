//! Fallible three-level block allocation for tridarr grids.
//!
//! A grid is a ragged structure of independently allocated blocks:
//!
//! ```text
//! RaggedGrid
//! └── spine: Vec<Plane>          (level 0, capacity x)
//!     └── Plane: Vec<Row>        (level 1, capacity y, ×x)
//!         └── Row: Vec<Elem>     (level 2, z elements, ×x·y)
//! ```
//!
//! Every block is requested through a [`BlockAllocator`], which may refuse.
//! The [`builder`] records a [`Frontier`](tridarr_core::Frontier) as it goes
//! so that a failure at any depth hands back exactly the blocks that exist,
//! and [`cleanup`] returns them to the allocator in a single pass.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod builder;
pub mod cleanup;
pub mod error;
pub mod grid;
pub mod site;

pub use alloc::{reserve_block, BlockAllocator, SystemAllocator};
pub use builder::{build, BuildFailure, Built};
pub use cleanup::{release, ReleaseReport};
pub use error::AllocError;
pub use grid::{Plane, RaggedGrid, Row};
pub use site::{BlockSite, Level};
