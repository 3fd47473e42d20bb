//! # `segdeque` - Segmented Double-Ended Queue
//!
//! A double-ended queue that stores its elements in fixed-capacity segments
//! instead of one contiguous ring. Growing the queue never moves an element:
//! only the small directory of segment slots is ever re-laid out, and emptied
//! segments are recycled through a per-deque pool.
//!
//! ## Guarantees
//!
//! ### Layout
//! - **Hole-free segments**: Every segment is a gap-free ring of up to `N`
//!   elements.
//! - **Dense interior**: Only the first and last segment may be partially
//!   filled, so any position resolves to `(segment, offset)` in O(1).
//! - **Spare directory slot**: While any segment is live the directory has at
//!   least one free slot, so attaching at either end never fails.
//!
//! ### Memory
//! - **Stable element storage**: Directory growth and shrinking move segment
//!   handles only; element blocks stay where they were allocated.
//! - **Bounded recycling**: Released segments are parked for reuse, and the
//!   pool trims itself against the live segment count (see [`ShrinkPolicy`]).
//! - **Hysteresis**: The directory halves only once it is comfortably sparse,
//!   so alternating push/pop at a boundary does not thrash allocations.
//!
//! ## Architecture
//!
//! Organized leaf-first:
//!
//! 1. **Segments** ([`Segment<T, N>`]): fixed blocks with O(1) push/pop at both
//!    ends and shorter-side shifting for in-place insert/remove.
//! 2. **Directory** ([`Directory<S>`]): a circular array of ownership slots,
//!    addressed by logical index.
//! 3. **Pool** ([`SegmentPool<T, N>`]): the per-deque free list.
//! 4. **Deque** ([`SegmentedDeque<T, N>`]): the public container, with cascade
//!    shifting for mid-sequence edits, iterators and positional cursors.
//!
//! ## Example
//!
//! ```rust
//! use segdeque::{SegmentedDeque, SeqCursor};
//!
//! let mut dq: SegmentedDeque<u32, 4> = SegmentedDeque::new();
//! for i in 0..10 {
//!     dq.push_back(i);
//! }
//! dq.push_front(100);
//! dq.insert(5, 50);
//! assert_eq!(dq.erase_at(1), Some(0));
//! assert_eq!(dq.to_string(), "[100 1 2 3 50 4 5 6 7 8 9]");
//!
//! let mut cursor = dq.iter_at(4);
//! assert_eq!(cursor.get(), Some(&50));
//! cursor.move_next();
//! assert_eq!(cursor.get(), Some(&4));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace`-level events for directory re-layouts and pool
//!   trims through the `tracing` crate.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]

pub mod alloc;
pub mod collections;
pub mod error;
pub mod policy;

mod trace;

pub use alloc::SegmentPool;
pub use collections::segmented_deque::DEFAULT_SEGMENT_CAPACITY;
pub use collections::{
    Cursor, CursorMut, Directory, IntoIter, Iter, IterMut, Segment, SegmentedDeque, SeqCursor,
};
pub use error::{OutOfRange, PolicyError};
pub use policy::ShrinkPolicy;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // A segment is a thin box plus two counters, whatever its capacity.
    assert!(mem::size_of::<Segment<u64, 128>>() == mem::size_of::<usize>() * 3);
    assert!(mem::size_of::<Segment<u8, 4096>>() == mem::size_of::<usize>() * 3);

    // Empty directory slots cost nothing extra.
    assert!(mem::size_of::<Option<Segment<u64, 128>>>() == mem::size_of::<Segment<u64, 128>>());
};
