//! Deterministic failure fixtures.
//!
//! - [`FailingAllocator`] refuses one allocation chosen by a [`FailPlan`].
//! - [`FailingWriter`] accepts a fixed number of lines, then errors.

use std::io::{self, Write};

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tridarr_arena::{AllocError, BlockAllocator, BlockSite, Level};

use crate::TrackingAllocator;

/// Which allocation a [`FailingAllocator`] refuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailPlan {
    /// Never fail.
    Never,
    /// Fail the n-th request (0-based), counting every attempt.
    AtAttempt(usize),
    /// Fail the request for this exact block.
    AtSite(BlockSite),
    /// Fail the first request at this level.
    AtLevel(Level),
}

/// Tracking allocator that refuses exactly one request.
///
/// Refusals look like genuine out-of-memory conditions
/// ([`AllocError::OutOfMemory`]). Every granted block goes through an
/// inner [`TrackingAllocator`], so after a failed build the test can
/// check that cleanup returned everything.
#[derive(Debug)]
pub struct FailingAllocator {
    inner: TrackingAllocator,
    plan: FailPlan,
    attempts: usize,
    tripped: Option<BlockSite>,
}

impl FailingAllocator {
    pub fn new(plan: FailPlan) -> Self {
        Self {
            inner: TrackingAllocator::new(),
            plan,
            attempts: 0,
            tripped: None,
        }
    }

    /// Refuse the n-th request (0-based).
    pub fn at_attempt(n: usize) -> Self {
        Self::new(FailPlan::AtAttempt(n))
    }

    /// Refuse the request for `site`.
    pub fn at_site(site: BlockSite) -> Self {
        Self::new(FailPlan::AtSite(site))
    }

    /// Refuse the first request at `level`.
    pub fn at_level(level: Level) -> Self {
        Self::new(FailPlan::AtLevel(level))
    }

    /// Refuse a request chosen from `0..attempts` by a ChaCha8 stream
    /// seeded with `seed`. The same seed always picks the same attempt.
    pub fn seeded(seed: u64, attempts: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let n = (rng.next_u64() % attempts.max(1) as u64) as usize;
        Self::at_attempt(n)
    }

    pub fn plan(&self) -> FailPlan {
        self.plan
    }

    /// Number of requests seen, including the refused one.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// The site that was refused, if the plan has fired.
    pub fn tripped(&self) -> Option<BlockSite> {
        self.tripped
    }

    /// The ledger of granted blocks.
    pub fn tracker(&self) -> &TrackingAllocator {
        &self.inner
    }

    fn should_fail(&self, attempt: usize, site: BlockSite) -> bool {
        if self.tripped.is_some() {
            return false;
        }
        match self.plan {
            FailPlan::Never => false,
            FailPlan::AtAttempt(n) => attempt == n,
            FailPlan::AtSite(target) => site == target,
            FailPlan::AtLevel(level) => site.level() == level,
        }
    }
}

impl BlockAllocator for FailingAllocator {
    fn allocate<T>(&mut self, site: BlockSite, len: usize) -> Result<Vec<T>, AllocError> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.should_fail(attempt, site) {
            self.tripped = Some(site);
            return Err(AllocError::OutOfMemory {
                site,
                bytes: len.saturating_mul(std::mem::size_of::<T>()),
            });
        }
        self.inner.allocate(site, len)
    }

    fn release<T>(&mut self, site: BlockSite, block: Vec<T>) {
        self.inner.release(site, block)
    }
}

/// Writer that accepts `limit` complete lines, then fails every write.
///
/// Counting is by newline bytes, so a line written in several fragments
/// is still one line.
#[derive(Debug)]
pub struct FailingWriter {
    limit: usize,
    lines: usize,
    written: Vec<u8>,
}

impl FailingWriter {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            lines: 0,
            written: Vec::new(),
        }
    }

    /// Complete lines accepted so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Everything accepted so far.
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Accepted output as UTF-8 text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.lines >= self.limit {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "deliberate write failure",
            ));
        }
        self.written.extend_from_slice(buf);
        self.lines += buf.iter().filter(|&&b| b == b'\n').count();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
