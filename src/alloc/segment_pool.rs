//! `SegmentPool` — a private free list of emptied segments.
//!
//! Every deque owns one pool. Segments released by the deque are cleared and
//! parked here, and the next segment the deque needs is taken from here before
//! any fresh block is allocated. The pool never hands out a segment that still
//! holds elements.
//!
//! The free list is bounded only by [`SegmentPool::trim`], which the deque calls
//! after each release with its live segment count and [`ShrinkPolicy`].

use crate::collections::segment::Segment;
use crate::policy::ShrinkPolicy;
use crate::trace::trace_event;

/// A free list of empty, reusable segments.
pub struct SegmentPool<T, const N: usize> {
    free: Vec<Segment<T, N>>,
}

impl<T, const N: usize> SegmentPool<T, N> {
    /// Creates an empty pool.
    pub const fn new() -> Self {
        Self { free: Vec::new() }
    }

    /// Returns the number of parked segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.free.len()
    }

    /// Returns `true` if no segment is parked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }

    /// Takes a parked segment, or allocates a new one if none is available.
    #[inline]
    pub fn get(&mut self) -> Segment<T, N> {
        self.free.pop().unwrap_or_default()
    }

    /// Clears `segment` and parks it for reuse.
    #[inline]
    pub fn put(&mut self, mut segment: Segment<T, N>) {
        segment.clear();
        self.free.push(segment);
    }

    /// Drops spare segments when the pool is oversized relative to `live` segments.
    ///
    /// Returns the number of segments released.
    pub fn trim(&mut self, live: usize, policy: &ShrinkPolicy) -> usize {
        if !policy.should_trim_pool(self.free.len(), live) {
            return 0;
        }
        let keep = policy.pool_retain(live);
        let released = self.free.len().saturating_sub(keep);
        self.free.truncate(keep);
        if released > 0 {
            trace_event!(released, kept = keep, live, "segment pool trimmed");
        }
        released
    }
}

impl<T, const N: usize> Default for SegmentPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
