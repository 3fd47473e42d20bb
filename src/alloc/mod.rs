//! Segment recycling.
//!
//! - `segment_pool`: the per-deque free list of emptied segments

pub mod segment_pool;

pub use segment_pool::SegmentPool;
