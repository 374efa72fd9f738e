//! Allocation error types.

use std::error::Error;
use std::fmt;

use crate::site::BlockSite;

/// A block could not be allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested size in bytes does not fit in `isize`.
    CapacityOverflow {
        /// Block that was being allocated.
        site: BlockSite,
        /// Number of slots requested.
        len: usize,
    },
    /// The memory allocator refused the request.
    OutOfMemory {
        /// Block that was being allocated.
        site: BlockSite,
        /// Number of bytes requested.
        bytes: usize,
    },
}

impl AllocError {
    /// Classify a refused request for `len` slots of `T`.
    pub fn for_request<T>(site: BlockSite, len: usize) -> Self {
        match len
            .checked_mul(std::mem::size_of::<T>())
            .filter(|&bytes| bytes <= isize::MAX as usize)
        {
            Some(bytes) => Self::OutOfMemory { site, bytes },
            None => Self::CapacityOverflow { site, len },
        }
    }

    /// The block whose allocation failed.
    pub fn site(&self) -> BlockSite {
        match self {
            Self::CapacityOverflow { site, .. } | Self::OutOfMemory { site, .. } => *site,
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { site, len } => {
                write!(f, "capacity overflow: {len} slots requested for {site}")
            }
            Self::OutOfMemory { site, bytes } => {
                write!(f, "cannot allocate memory: {bytes} bytes requested for {site}")
            }
        }
    }
}

impl Error for AllocError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_request_classified_as_oom() {
        let err = AllocError::for_request::<u64>(BlockSite::Row { i: 0, j: 1 }, 4);
        assert_eq!(
            err,
            AllocError::OutOfMemory {
                site: BlockSite::Row { i: 0, j: 1 },
                bytes: 32,
            }
        );
    }

    #[test]
    fn huge_request_classified_as_overflow() {
        let err = AllocError::for_request::<u64>(BlockSite::Spine, usize::MAX);
        assert!(matches!(err, AllocError::CapacityOverflow { len, .. } if len == usize::MAX));
        assert_eq!(err.site(), BlockSite::Spine);
    }

    #[test]
    fn display_mentions_site() {
        let err = AllocError::OutOfMemory {
            site: BlockSite::Plane { i: 7 },
            bytes: 48,
        };
        assert_eq!(
            err.to_string(),
            "cannot allocate memory: 48 bytes requested for plane 7"
        );
    }
}
