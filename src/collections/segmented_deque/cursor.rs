//! Positional cursors for external sequence algorithms.
//!
//! A cursor is a `(deque, position)` pair. It stores no segment pointer and
//! resolves its position on every access, so it stays cheap to copy and is
//! never left dangling by directory re-layouts.
//!
//! Positions run over `[0, len]`; `len` is the end sentinel. Stepping past
//! either end lands on the sentinel, and stepping off the sentinel wraps to
//! the opposite end, so both forward and backward loops terminate on
//! [`SeqCursor::is_valid`]:
//!
//! ```rust
//! use segdeque::{SegmentedDeque, SeqCursor};
//!
//! let dq: SegmentedDeque<u32> = (1..=3).collect();
//! let mut seen: Vec<&u32> = Vec::new();
//! let mut cursor = dq.last();
//! while cursor.is_valid() {
//!     seen.extend(cursor.get());
//!     cursor.move_prev();
//! }
//! assert_eq!(seen, vec![&3, &2, &1]);
//! assert_eq!(cursor, dq.end());
//! ```
//!
//! Structural mutation (push, pop, insert, erase) needs `&mut SegmentedDeque`,
//! so the borrow checker retires every `Cursor` before it happens.
//! [`CursorMut`] can overwrite and swap elements but never changes the length.

use core::cmp::Ordering;
use core::fmt;
use core::ptr;

use super::SegmentedDeque;
use crate::error::OutOfRange;

/// Position-stepping protocol shared by [`Cursor`] and [`CursorMut`].
pub trait SeqCursor {
    /// Current logical position; equals [`end_position`](Self::end_position) on the sentinel.
    fn position(&self) -> usize;

    /// Position of the end sentinel (the sequence length).
    fn end_position(&self) -> usize;

    /// Moves to `pos`, clamped to the end sentinel.
    fn seek(&mut self, pos: usize);

    /// Returns `true` unless the cursor sits on the end sentinel.
    #[inline]
    fn is_valid(&self) -> bool {
        self.position() < self.end_position()
    }

    /// Steps toward the back; the sentinel wraps to position 0.
    #[inline]
    fn move_next(&mut self) {
        let pos = self.position();
        let end = self.end_position();
        self.seek(if pos >= end { 0 } else { pos + 1 });
    }

    /// Steps toward the front; position 0 wraps to the sentinel.
    #[inline]
    fn move_prev(&mut self) {
        let pos = self.position();
        let end = self.end_position();
        self.seek(if pos == 0 { end } else { pos - 1 });
    }
}

/// A read-only cursor into a [`SegmentedDeque`].
pub struct Cursor<'a, T, const N: usize> {
    deque: &'a SegmentedDeque<T, N>,
    position: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    #[inline]
    pub(crate) fn new(deque: &'a SegmentedDeque<T, N>, position: usize) -> Self {
        Self {
            deque,
            position: position.min(deque.len()),
        }
    }

    /// Returns the element under the cursor, or `None` on the sentinel.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.deque.get(self.position)
    }

    /// Returns the element `offset` positions away from the cursor.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        self.deque.get(self.position.checked_add_signed(offset)?)
    }

    /// Signed number of steps from `self` to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> isize {
        other.position as isize - self.position as isize
    }

    /// Returns the deque this cursor walks.
    #[inline]
    pub fn deque(&self) -> &'a SegmentedDeque<T, N> {
        self.deque
    }
}

impl<'a, T, const N: usize> SeqCursor for Cursor<'a, T, N> {
    #[inline]
    fn position(&self) -> usize {
        self.position
    }

    #[inline]
    fn end_position(&self) -> usize {
        self.deque.len()
    }

    #[inline]
    fn seek(&mut self, pos: usize) {
        self.position = pos.min(self.deque.len());
    }
}

impl<'a, T, const N: usize> Clone for Cursor<'a, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, const N: usize> Copy for Cursor<'a, T, N> {}

impl<'a, T, const N: usize> PartialEq for Cursor<'a, T, N> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.deque, other.deque) && self.position == other.position
    }
}

impl<'a, T, const N: usize> Eq for Cursor<'a, T, N> {}

/// Cursors into different deques are unordered.
impl<'a, T, const N: usize> PartialOrd for Cursor<'a, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.deque, other.deque) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl<'a, T, const N: usize> fmt::Debug for Cursor<'a, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.deque.len())
            .finish()
    }
}

/// A cursor that may overwrite elements of a [`SegmentedDeque`].
pub struct CursorMut<'a, T, const N: usize> {
    deque: &'a mut SegmentedDeque<T, N>,
    position: usize,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    #[inline]
    pub(crate) fn new(deque: &'a mut SegmentedDeque<T, N>, position: usize) -> Self {
        let position = position.min(deque.len());
        Self { deque, position }
    }

    /// Returns the element under the cursor.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.deque.get(self.position)
    }

    /// Returns the element under the cursor mutably.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.deque.get_mut(self.position)
    }

    /// Overwrites the element under the cursor.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] on the end sentinel.
    #[inline]
    pub fn set(&mut self, value: T) -> Result<(), OutOfRange> {
        self.deque.set(self.position, value)
    }

    /// Swaps the element under the cursor with the one at `other`.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if either position is not a live element.
    #[inline]
    pub fn swap_with(&mut self, other: usize) -> Result<(), OutOfRange> {
        self.deque.swap(self.position, other)
    }

    /// Borrows a read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.deque, self.position)
    }
}

impl<'a, T, const N: usize> SeqCursor for CursorMut<'a, T, N> {
    #[inline]
    fn position(&self) -> usize {
        self.position
    }

    #[inline]
    fn end_position(&self) -> usize {
        self.deque.len()
    }

    #[inline]
    fn seek(&mut self, pos: usize) {
        self.position = pos.min(self.deque.len());
    }
}

impl<'a, T, const N: usize> fmt::Debug for CursorMut<'a, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.deque.len())
            .finish()
    }
}

impl<T, const N: usize> SegmentedDeque<T, N> {
    /// Cursor at the first element (the sentinel when empty).
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        self.first()
    }

    /// Cursor at the end sentinel.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len)
    }

    /// Cursor at the first element (the sentinel when empty).
    #[inline]
    pub fn first(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, 0)
    }

    /// Cursor at the last element (the sentinel when empty).
    #[inline]
    pub fn last(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len.checked_sub(1).unwrap_or(self.len))
    }

    /// Cursor at `pos`, clamped to the end sentinel.
    #[inline]
    pub fn iter_at(&self, pos: usize) -> Cursor<'_, T, N> {
        Cursor::new(self, pos)
    }

    /// Mutable cursor at `pos`, clamped to the end sentinel.
    #[inline]
    pub fn cursor_mut_at(&mut self, pos: usize) -> CursorMut<'_, T, N> {
        CursorMut::new(self, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_walk_wraps_through_sentinel() {
        let dq: SegmentedDeque<u32, 2> = (0..5).collect();
        let mut cursor = dq.begin();
        let mut seen = Vec::new();
        while cursor.is_valid() {
            seen.push(*cursor.get().unwrap());
            cursor.move_next();
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(cursor, dq.end());
        assert_eq!(cursor.get(), None);

        cursor.move_next();
        assert_eq!(cursor, dq.first());
    }

    #[test]
    fn empty_deque_cursors_coincide() {
        let dq: SegmentedDeque<u32, 2> = SegmentedDeque::new();
        assert_eq!(dq.begin(), dq.end());
        assert_eq!(dq.last(), dq.end());
        assert!(!dq.first().is_valid());
    }

    #[test]
    fn ordering_requires_same_deque() {
        let a: SegmentedDeque<u32, 2> = (0..4).collect();
        let b: SegmentedDeque<u32, 2> = (0..4).collect();
        assert!(a.first() < a.last());
        assert_eq!(a.first().partial_cmp(&b.first()), None);
        assert_ne!(a.first(), b.first());
        assert_eq!(a.first().distance_to(&a.end()), 4);
        assert_eq!(a.end().distance_to(&a.first()), -4);
    }

    #[test]
    fn peek_and_seek() {
        let dq: SegmentedDeque<u32, 2> = (10..15).collect();
        let mut cursor = dq.iter_at(2);
        assert_eq!(cursor.peek(0), Some(&12));
        assert_eq!(cursor.peek(-2), Some(&10));
        assert_eq!(cursor.peek(-3), None);
        assert_eq!(cursor.peek(3), None);
        cursor.seek(100);
        assert_eq!(cursor.position(), 5);
        assert_eq!(dq.iter_at(99), dq.end());
    }

    #[test]
    fn cursor_mut_writes_in_place() {
        let mut dq: SegmentedDeque<u32, 2> = (0..5).collect();
        let mut cursor = dq.cursor_mut_at(1);
        *cursor.get_mut().unwrap() = 10;
        cursor.move_next();
        cursor.set(20).unwrap();
        cursor.swap_with(4).unwrap();
        assert_eq!(cursor.get(), Some(&4));
        assert_eq!(cursor.as_cursor().peek(-1), Some(&10));
        assert_eq!(cursor.swap_with(5), Err(OutOfRange { index: 5, len: 5 }));

        cursor.seek(5);
        assert_eq!(cursor.set(1), Err(OutOfRange { index: 5, len: 5 }));
        assert_eq!(dq.to_string(), "[0 10 4 3 20]");
    }
}
