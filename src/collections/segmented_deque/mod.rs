//! `SegmentedDeque` — a double-ended queue over pooled fixed-capacity segments.
//!
//! Elements live in [`Segment`]s of `N` slots. The segments are owned by a
//! circular [`Directory`]; emptied segments go back to a private
//! [`SegmentPool`] and are reused before anything new is allocated.
//!
//! ## Performance Characteristics
//!
//! - **Push/Pop at either end**: amortized O(1)
//! - **Random access**: O(1), two divisions at most
//! - **Insert/erase at `pos`**: O(N + min(pos, len - pos) / N) element moves
//! - **Directory re-layout**: O(segments), segments move by ownership
//!
//! ## Layout
//!
//! Between operations every segment in the directory is non-empty, and every
//! segment strictly between the first and the last one is full. Only the two
//! boundary segments are partial, which is what lets any position be addressed
//! with a single subtraction and division.
//!
//! Mid-sequence insertions and erasures cascade one element per segment
//! boundary toward whichever end is closer, so the layout survives them.
//!
//! ```rust
//! use segdeque::SegmentedDeque;
//!
//! let mut dq: SegmentedDeque<i32> = (0..=8).collect();
//! dq.insert(4, 99);
//! assert_eq!(dq.to_string(), "[0 1 2 3 99 4 5 6 7 8]");
//! dq.erase_at(0);
//! assert_eq!(dq.pop_front(), Some(1));
//! assert_eq!(dq.front(), Some(&2));
//! ```

use core::fmt;
use core::mem;

use crate::alloc::SegmentPool;
use crate::collections::directory::Directory;
use crate::collections::segment::Segment;
use crate::error::{OutOfRange, PolicyError};
use crate::policy::ShrinkPolicy;
use crate::trace::trace_event;

mod cursor;
mod iter;
mod shift;

pub use cursor::{Cursor, CursorMut, SeqCursor};
pub use iter::{IntoIter, Iter, IterMut};

use shift::Shift;

/// Segment capacity used when none is named.
pub const DEFAULT_SEGMENT_CAPACITY: usize = 128;

/// Which end of the deque an operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Front,
    Back,
}

/// A double-ended queue built from pooled segments of `N` elements.
pub struct SegmentedDeque<T, const N: usize = DEFAULT_SEGMENT_CAPACITY> {
    directory: Directory<Segment<T, N>>,
    pool: SegmentPool<T, N>,
    len: usize,
    policy: ShrinkPolicy,
}

impl<T, const N: usize> SegmentedDeque<T, N> {
    /// Creates an empty deque. Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self {
            directory: Directory::new(),
            pool: SegmentPool::new(),
            len: 0,
            policy: ShrinkPolicy::new(),
        }
    }

    /// Creates an empty deque using a custom shrink policy.
    ///
    /// # Errors
    /// Returns [`PolicyError`] if `policy` fails [`ShrinkPolicy::validate`].
    pub fn with_policy(policy: ShrinkPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            policy,
            ..Self::new()
        })
    }

    /// Returns the shrink policy in effect.
    #[inline]
    pub fn policy(&self) -> &ShrinkPolicy {
        &self.policy
    }

    /// Returns the number of elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the per-segment capacity `N`.
    #[inline(always)]
    pub const fn segment_capacity(&self) -> usize {
        N
    }

    /// Returns the number of segments in use.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.directory.len()
    }

    /// Returns the number of directory slots.
    #[inline]
    pub fn directory_capacity(&self) -> usize {
        self.directory.capacity()
    }

    /// Returns the number of spare segments parked in the pool.
    #[inline]
    pub fn pooled_segments(&self) -> usize {
        self.pool.len()
    }

    /// Maps a logical position to `(segment, offset)`.
    ///
    /// The first segment is addressed by its own length; every later segment is
    /// assumed full. The result is only meaningful for `pos < len` (or for the
    /// predecessor/successor of a position during an insert).
    #[inline]
    pub(crate) fn resolve(&self, pos: usize) -> (usize, usize) {
        let first = self.directory.first().map_or(0, Segment::len);
        if pos < first {
            return (0, pos);
        }
        let p = pos - first;
        (1 + p / N, p % N)
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.directory.first()?.front()
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.directory.last()?.back()
    }

    /// Returns the first element mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.directory.first_mut()?.get_mut(0)
    }

    /// Returns the last element mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let seg = self.directory.last_mut()?;
        let i = seg.len().checked_sub(1)?;
        seg.get_mut(i)
    }

    /// Returns the element at `pos`, or `None` if `pos >= len()`.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos >= self.len {
            return None;
        }
        let (s, o) = self.resolve(pos);
        self.directory.get(s)?.get(o)
    }

    /// Returns the element at `pos` mutably, or `None` if `pos >= len()`.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        if pos >= self.len {
            return None;
        }
        let (s, o) = self.resolve(pos);
        self.directory.get_mut(s)?.get_mut(o)
    }

    /// Overwrites the element at `pos`.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if `pos >= len()`; the deque is left unchanged.
    pub fn set(&mut self, pos: usize, value: T) -> Result<(), OutOfRange> {
        match self.get_mut(pos) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(OutOfRange::new(pos, self.len)),
        }
    }

    /// Swaps the elements at positions `i` and `j`.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] naming the first invalid position; nothing moves.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), OutOfRange> {
        for pos in [i, j] {
            if pos >= self.len {
                return Err(OutOfRange::new(pos, self.len));
            }
        }
        self.exchange(i, j);
        Ok(())
    }

    /// Swaps two live positions.
    fn exchange(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (si, oi) = self.resolve(i);
        let (sj, oj) = self.resolve(j);
        if si == sj {
            if let Some(seg) = self.directory.get_mut(si) {
                seg.swap(oi, oj);
            }
        } else if let Some((a, b)) = self.directory.pair_mut(si, sj) {
            if let (Some(x), Some(y)) = (a.get_mut(oi), b.get_mut(oj)) {
                mem::swap(x, y);
            }
        }
    }

    /// Prepends an element.
    pub fn push_front(&mut self, value: T) {
        if self.directory.first().map_or(true, Segment::is_full) {
            self.attach(End::Front);
        }
        if let Some(seg) = self.directory.first_mut() {
            let pushed = seg.push_front(value);
            debug_assert!(pushed.is_ok(), "front segment has room");
            if pushed.is_ok() {
                self.len += 1;
            }
        }
        self.grow_if_saturated();
    }

    /// Appends an element.
    pub fn push_back(&mut self, value: T) {
        if self.directory.last().map_or(true, Segment::is_full) {
            self.attach(End::Back);
        }
        if let Some(seg) = self.directory.last_mut() {
            let pushed = seg.push_back(value);
            debug_assert!(pushed.is_ok(), "back segment has room");
            if pushed.is_ok() {
                self.len += 1;
            }
        }
        self.grow_if_saturated();
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let seg = self.directory.first_mut()?;
        let value = seg.pop_front()?;
        let emptied = seg.is_empty();
        self.len -= 1;
        if emptied {
            self.release(End::Front);
        }
        Some(value)
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let seg = self.directory.last_mut()?;
        let value = seg.pop_back()?;
        let emptied = seg.is_empty();
        self.len -= 1;
        if emptied {
            self.release(End::Back);
        }
        Some(value)
    }

    /// Inserts `value` so that it ends up at position `pos`.
    ///
    /// Elements are shifted toward whichever end is closer. A `pos` greater
    /// than `len()` is ignored and `value` is dropped.
    pub fn insert(&mut self, pos: usize, value: T) {
        if pos > self.len {
            return;
        }
        if pos == 0 {
            return self.push_front(value);
        }
        if pos == self.len {
            return self.push_back(value);
        }
        let (s, _) = self.resolve(pos);
        let inserted = if s < self.directory.len() - s {
            self.insert_toward_front(pos, value)
        } else {
            self.insert_toward_back(pos, value)
        };
        if inserted {
            self.len += 1;
        }
        self.grow_if_saturated();
    }

    /// Opens a slot at `pos` by moving `[0, pos)` one step toward the front.
    fn insert_toward_front(&mut self, pos: usize, value: T) -> bool {
        if self.directory.first().map_or(true, Segment::is_full) {
            self.attach(End::Front);
        }
        let (s, o) = self.resolve(pos - 1);
        self.shift(Shift::TowardFront, 0, s);
        // Segment 0 did not give anything away, so its predecessor did not move.
        let at = if s == 0 { o + 1 } else { o };
        self.directory
            .get_mut(s)
            .is_some_and(|seg| seg.insert(at, value).is_ok())
    }

    /// Opens a slot at `pos` by moving `[pos, len)` one step toward the back.
    fn insert_toward_back(&mut self, pos: usize, value: T) -> bool {
        if self.directory.last().map_or(true, Segment::is_full) {
            self.attach(End::Back);
        }
        let (s, o) = self.resolve(pos);
        let last = self.directory.len() - 1;
        self.shift(Shift::TowardBack, s, last);
        self.directory
            .get_mut(s)
            .is_some_and(|seg| seg.insert(o, value).is_ok())
    }

    /// Removes and returns the element at `pos`, or `None` if `pos >= len()`.
    ///
    /// The gap is closed from whichever end is closer.
    pub fn erase_at(&mut self, pos: usize) -> Option<T> {
        if pos >= self.len {
            return None;
        }
        let (s, o) = self.resolve(pos);
        let value = self.directory.get_mut(s)?.remove(o)?;
        self.len -= 1;
        let last = self.directory.len() - 1;
        if s < last - s {
            self.shift(Shift::TowardBack, 0, s);
            if self.directory.first().is_some_and(Segment::is_empty) {
                self.release(End::Front);
            }
        } else {
            self.shift(Shift::TowardFront, s, last);
            if self.directory.last().is_some_and(Segment::is_empty) {
                self.release(End::Back);
            }
        }
        Some(value)
    }

    /// Removes the elements in `[first, last)`.
    ///
    /// Ignored unless `first < last <= len()`. Whichever side outside the range
    /// is shorter is moved over the range, then the vacated end is popped.
    pub fn erase_range(&mut self, first: usize, last: usize) {
        if first >= last || last > self.len {
            return;
        }
        let n = last - first;
        if self.len - last < first {
            for pos in first..self.len - n {
                self.exchange(pos, pos + n);
            }
            for _ in 0..n {
                self.pop_back();
            }
        } else {
            for pos in (n..last).rev() {
                self.exchange(pos, pos - n);
            }
            for _ in 0..n {
                self.pop_front();
            }
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.erase_range(0, self.len);
    }

    /// Shortens the deque to `len` elements, dropping the rest from the back.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.pop_back();
        }
    }

    /// Checks the segment layout: counts add up, no segment is empty, interior
    /// segments are full and the directory has a spare slot.
    ///
    /// Intended for tests and debugging; costs O(segments).
    pub fn is_well_formed(&self) -> bool {
        let segments = self.directory.len();
        if (self.len == 0) != (segments == 0) {
            return false;
        }
        if segments > 0 && self.directory.capacity() <= segments {
            return false;
        }
        let mut total = 0;
        for (i, seg) in self.directory.iter().enumerate() {
            if seg.is_empty() {
                return false;
            }
            if i > 0 && i + 1 < segments && !seg.is_full() {
                return false;
            }
            total += seg.len();
        }
        total == self.len
    }

    /// Takes a segment from the pool and attaches it at `end`.
    fn attach(&mut self, end: End) {
        if self.directory.is_full() {
            self.grow();
        }
        let segment = self.pool.get();
        let attached = match end {
            End::Front => self.directory.push_front(segment),
            End::Back => self.directory.push_back(segment),
        };
        debug_assert!(attached.is_ok(), "directory has a free slot after growth");
    }

    /// Detaches the boundary segment at `end`, parks it and re-evaluates shrinking.
    fn release(&mut self, end: End) {
        let detached = match end {
            End::Front => self.directory.pop_front(),
            End::Back => self.directory.pop_back(),
        };
        if let Some(segment) = detached {
            self.pool.put(segment);
            self.pool.trim(self.directory.len(), &self.policy);
        }
        self.shrink_if_sparse();
    }

    #[inline]
    fn grow_if_saturated(&mut self) {
        if self.directory.len() >= self.directory.capacity() {
            self.grow();
        }
    }

    fn grow(&mut self) {
        let segments = self.directory.len();
        let capacity = (2 * segments).max(1);
        trace_event!(segments, from = self.directory.capacity(), to = capacity, "directory grow");
        self.directory.resize(capacity);
    }

    fn shrink_if_sparse(&mut self) {
        let segments = self.directory.len();
        let capacity = self.directory.capacity();
        if self.policy.should_shrink_directory(segments, capacity) {
            trace_event!(segments, from = capacity, to = capacity / 2, "directory shrink");
            self.directory.resize(capacity / 2);
        }
    }
}

impl<T, const N: usize> Default for SegmentedDeque<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for SegmentedDeque<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self {
            policy: self.policy,
            ..Self::new()
        };
        out.extend(self.iter().cloned());
        out
    }
}

impl<T: PartialEq, const N: usize> PartialEq for SegmentedDeque<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for SegmentedDeque<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for SegmentedDeque<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `[e0 e1 ... en]`.
impl<T: fmt::Display, const N: usize> fmt::Display for SegmentedDeque<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T, const N: usize> From<Vec<T>> for SegmentedDeque<T, N> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}
