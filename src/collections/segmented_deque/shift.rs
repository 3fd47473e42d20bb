//! Cascade shifting across segment boundaries.
//!
//! A cascade moves exactly one element across each boundary between segments
//! `lo` and `hi`, which opens a free slot at one end of the run and consumes
//! one at the other. Insert and erase both use it, just in opposite directions.

use super::SegmentedDeque;

/// Direction elements travel during a cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shift {
    /// Each segment in `(lo, hi]` hands its front element to its predecessor.
    ///
    /// Segment `lo` must have room; segment `hi` ends up with a free slot.
    TowardFront,
    /// Each segment in `[lo, hi)` hands its back element to its successor.
    ///
    /// Segment `hi` must have room; segment `lo` ends up with a free slot.
    TowardBack,
}

impl<T, const N: usize> SegmentedDeque<T, N> {
    /// Cascades one element per boundary between segments `lo` and `hi`.
    pub(super) fn shift(&mut self, dir: Shift, lo: usize, hi: usize) {
        match dir {
            Shift::TowardFront => {
                for i in lo..hi {
                    self.transfer(dir, i + 1, i);
                }
            }
            Shift::TowardBack => {
                for i in (lo..hi).rev() {
                    self.transfer(dir, i, i + 1);
                }
            }
        }
    }

    /// Moves the boundary element of segment `from` into segment `to`.
    fn transfer(&mut self, dir: Shift, from: usize, to: usize) {
        let Some((src, dst)) = self.directory.pair_mut(from, to) else {
            return;
        };
        let moved = match dir {
            Shift::TowardFront => src.pop_front().map(|v| dst.push_back(v)),
            Shift::TowardBack => src.pop_back().map(|v| dst.push_front(v)),
        };
        debug_assert!(
            matches!(moved, Some(Ok(()))),
            "cascade source is non-empty and target has room"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout<const N: usize>(dq: &SegmentedDeque<u32, N>) -> Vec<usize> {
        dq.directory.iter().map(|seg| seg.len()).collect()
    }

    #[test]
    fn toward_front_fills_first_segment() {
        let mut dq: SegmentedDeque<u32, 4> = SegmentedDeque::new();
        for i in 0..10 {
            dq.push_back(i);
        }
        dq.pop_front();
        assert_eq!(layout(&dq), vec![3, 4, 2]);

        dq.shift(Shift::TowardFront, 0, 2);
        assert_eq!(layout(&dq), vec![4, 4, 1]);
        assert_eq!(dq.iter().copied().collect::<Vec<_>>(), (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn toward_back_fills_last_segment() {
        let mut dq: SegmentedDeque<u32, 4> = SegmentedDeque::new();
        for i in 0..10 {
            dq.push_back(i);
        }
        assert_eq!(layout(&dq), vec![4, 4, 2]);

        dq.shift(Shift::TowardBack, 0, 2);
        assert_eq!(layout(&dq), vec![3, 4, 3]);
        assert_eq!(dq.iter().copied().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn empty_range_is_noop() {
        let mut dq: SegmentedDeque<u32, 4> = SegmentedDeque::new();
        for i in 0..6 {
            dq.push_back(i);
        }
        dq.shift(Shift::TowardFront, 1, 1);
        dq.shift(Shift::TowardBack, 0, 0);
        assert_eq!(layout(&dq), vec![4, 2]);
    }
}
