//! The block allocation seam.
//!
//! [`BlockAllocator`] is the only way the builder obtains memory and the
//! only way cleanup gives it back. [`SystemAllocator`] is the production
//! implementation: it asks the global allocator for exact capacity via
//! `try_reserve_exact`, so exhaustion surfaces as an [`AllocError`]
//! rather than an abort.

use crate::error::AllocError;
use crate::site::BlockSite;

/// Source of grid blocks.
///
/// `allocate` returns an empty `Vec` whose capacity is at least `len`;
/// the caller fills it without further growth. `release` takes the block
/// back. Every block handed out is released at most once, at the same
/// `site` it was allocated for.
pub trait BlockAllocator {
    /// Allocate a block with room for `len` slots.
    fn allocate<T>(&mut self, site: BlockSite, len: usize) -> Result<Vec<T>, AllocError>;

    /// Return a block previously obtained from [`allocate`](Self::allocate).
    fn release<T>(&mut self, site: BlockSite, block: Vec<T>);
}

impl<A: BlockAllocator> BlockAllocator for &mut A {
    fn allocate<T>(&mut self, site: BlockSite, len: usize) -> Result<Vec<T>, AllocError> {
        (**self).allocate(site, len)
    }

    fn release<T>(&mut self, site: BlockSite, block: Vec<T>) {
        (**self).release(site, block)
    }
}

/// Reserve an empty block with exact capacity for `len` slots.
///
/// Shared by every allocator that ultimately hands out real memory.
pub fn reserve_block<T>(site: BlockSite, len: usize) -> Result<Vec<T>, AllocError> {
    let mut block = Vec::new();
    block
        .try_reserve_exact(len)
        .map_err(|_| AllocError::for_request::<T>(site, len))?;
    Ok(block)
}

/// Allocator backed by the global heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl BlockAllocator for SystemAllocator {
    fn allocate<T>(&mut self, site: BlockSite, len: usize) -> Result<Vec<T>, AllocError> {
        reserve_block(site, len)
    }

    fn release<T>(&mut self, _site: BlockSite, block: Vec<T>) {
        drop(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_block_has_capacity_and_no_elements() {
        let block: Vec<u64> = reserve_block(BlockSite::Row { i: 0, j: 0 }, 16).unwrap();
        assert!(block.is_empty());
        assert!(block.capacity() >= 16);
    }

    #[test]
    fn zero_length_block_is_valid() {
        let block: Vec<u64> = reserve_block(BlockSite::Spine, 0).unwrap();
        assert!(block.is_empty());
    }

    #[test]
    fn overflowing_request_is_an_error_not_a_panic() {
        let result: Result<Vec<u64>, _> = SystemAllocator.allocate(BlockSite::Spine, usize::MAX);
        assert!(matches!(result, Err(AllocError::CapacityOverflow { .. })));
    }

    #[test]
    fn forwarding_through_mut_ref() {
        fn round_trip<A: BlockAllocator>(mut alloc: A) -> usize {
            let block: Vec<u8> = alloc.allocate(BlockSite::Plane { i: 1 }, 3).unwrap();
            let cap = block.capacity();
            alloc.release(BlockSite::Plane { i: 1 }, block);
            cap
        }
        let mut sys = SystemAllocator;
        assert!(round_trip(&mut sys) >= 3);
    }
}
