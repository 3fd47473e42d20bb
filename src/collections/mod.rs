//! Collections making up the segmented deque.
//!
//! Organized leaf-first:
//! - `segment`: fixed-capacity gap-free ring buffer
//! - `directory`: circular array of segment slots
//! - `segmented_deque`: the deque, its cursors and iterators

pub mod directory;
pub mod segment;
pub mod segmented_deque;

pub use directory::Directory;
pub use segment::Segment;
pub use segmented_deque::{Cursor, CursorMut, IntoIter, Iter, IterMut, SegmentedDeque, SeqCursor};
