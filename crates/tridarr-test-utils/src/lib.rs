//! Test utilities for tridarr development.
//!
//! Provides a [`TrackingAllocator`] that keeps a ledger of every live
//! block, keyed by [`BlockSite`], so tests can assert that nothing leaks
//! and nothing is released twice. Deterministic failure fixtures live in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{FailPlan, FailingAllocator, FailingWriter};

use indexmap::IndexMap;
use tridarr_arena::{reserve_block, AllocError, BlockAllocator, BlockSite, Level};

/// Allocator that records every block it hands out and takes back.
///
/// Blocks are real heap allocations obtained through
/// [`reserve_block`]. The ledger panics on a second allocation at a live
/// site and on the release of a site that is not live, which turns leaks
/// and double frees into test failures.
#[derive(Debug, Default)]
pub struct TrackingAllocator {
    /// Live blocks in allocation order, with their size in bytes.
    live: IndexMap<BlockSite, usize>,
    allocations: usize,
    release_log: Vec<BlockSite>,
}

impl TrackingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful allocations so far.
    pub fn allocations(&self) -> usize {
        self.allocations
    }

    /// Number of releases so far.
    pub fn releases(&self) -> usize {
        self.release_log.len()
    }

    /// Number of blocks allocated and not yet released.
    pub fn outstanding(&self) -> usize {
        self.live.len()
    }

    /// Bytes held by live blocks.
    pub fn outstanding_bytes(&self) -> usize {
        self.live.values().sum()
    }

    /// Number of live blocks at `level`.
    pub fn live_at(&self, level: Level) -> usize {
        self.live.keys().filter(|site| site.level() == level).count()
    }

    /// Whether the block at `site` is currently live.
    pub fn is_live(&self, site: BlockSite) -> bool {
        self.live.contains_key(&site)
    }

    /// Every release, in order.
    pub fn release_log(&self) -> &[BlockSite] {
        &self.release_log
    }

    /// Panic with the list of leaked sites if any block is still live.
    #[track_caller]
    pub fn assert_no_leaks(&self) {
        assert!(
            self.live.is_empty(),
            "{} block(s) leaked: {:?}",
            self.live.len(),
            self.live.keys().collect::<Vec<_>>()
        );
    }
}

impl BlockAllocator for TrackingAllocator {
    fn allocate<T>(&mut self, site: BlockSite, len: usize) -> Result<Vec<T>, AllocError> {
        let block = reserve_block::<T>(site, len)?;
        let previous = self.live.insert(site, len * std::mem::size_of::<T>());
        assert!(previous.is_none(), "{site} allocated while still live");
        self.allocations += 1;
        Ok(block)
    }

    fn release<T>(&mut self, site: BlockSite, block: Vec<T>) {
        assert!(
            self.live.shift_remove(&site).is_some(),
            "{site} released but not live (double free?)"
        );
        self.release_log.push(site);
        drop(block);
    }
}
