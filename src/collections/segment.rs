//! `Segment` — a fixed-capacity ring buffer that never has holes.
//!
//! A segment owns one heap block of `N` slots. Live elements always form a
//! single logical run `[0, len)`; logical index `i` lives in physical slot
//! `(head + i) mod N`. In-place insert and remove shift whichever side of the
//! run is shorter, so the run stays contiguous without touching neighbours.
//!
//! Segments are the unit the deque allocates, pools and moves between directory
//! slots. Moving a `Segment` moves three words; the element block stays put.

use core::fmt;
use core::iter::FusedIterator;
use core::mem::{self, MaybeUninit};

/// A fixed-capacity, gap-free buffer of up to `N` elements.
pub struct Segment<T, const N: usize> {
    buf: Box<[MaybeUninit<T>; N]>,
    head: usize,
    len: usize,
}

impl<T, const N: usize> Segment<T, N> {
    const NONZERO: () = assert!(N > 0, "Segment capacity must be > 0");

    /// Allocates an empty segment.
    pub fn new() -> Self {
        let () = Self::NONZERO;
        Self {
            buf: new_uninit_block::<T, N>(),
            head: 0,
            len: 0,
        }
    }

    /// Returns the fixed capacity `N`.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of live elements.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the segment holds no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no slot is free.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline(always)]
    const fn wrap(p: usize) -> usize {
        if p >= N {
            p - N
        } else {
            p
        }
    }

    /// Physical slot of logical index `i` (`i <= N`).
    #[inline(always)]
    const fn slot(&self, i: usize) -> usize {
        Self::wrap(self.head + i)
    }

    /// Moves the element in physical slot `from` to the free slot `to`.
    ///
    /// # Safety
    /// `from` must hold a live element and `to` must be vacant.
    #[inline(always)]
    unsafe fn relocate(&mut self, from: usize, to: usize) {
        let value = self.buf[from].assume_init_read();
        self.buf[to].write(value);
    }

    /// Appends `value`, handing it back if the segment is full.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let p = self.slot(self.len);
        self.buf[p].write(value);
        self.len += 1;
        Ok(())
    }

    /// Prepends `value`, handing it back if the segment is full.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.head = if self.head == 0 { N - 1 } else { self.head - 1 };
        self.buf[self.head].write(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let p = self.slot(self.len);
        // SAFETY: `p` held logical index `len - 1`, which was live; `len` has
        // already been decremented so the slot is now treated as vacant.
        Some(unsafe { self.buf[p].assume_init_read() })
    }

    /// Removes and returns the first element.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let p = self.head;
        self.head = Self::wrap(self.head + 1);
        self.len -= 1;
        // SAFETY: `p` was the head slot of a non-empty segment.
        Some(unsafe { self.buf[p].assume_init_read() })
    }

    /// Returns the element at logical index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        // SAFETY: `i < len`, so the slot is initialized.
        Some(unsafe { self.buf[self.slot(i)].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at logical index `i`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i >= self.len {
            return None;
        }
        let p = self.slot(i);
        // SAFETY: `i < len`, so the slot is initialized.
        Some(unsafe { self.buf[p].assume_init_mut() })
    }

    /// Overwrites the element at `i`, returning the previous value.
    ///
    /// Hands `value` back when `i` is out of range.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<T, T> {
        match self.get_mut(i) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err(value),
        }
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Inserts `value` at logical index `i`, shifting the shorter side.
    ///
    /// Hands `value` back when the segment is full or `i > len`.
    pub fn insert(&mut self, i: usize, value: T) -> Result<(), T> {
        if self.is_full() || i > self.len {
            return Err(value);
        }
        if i < self.len - i {
            // Slide [0, i) one slot toward the front.
            let old_head = self.head;
            let new_head = if old_head == 0 { N - 1 } else { old_head - 1 };
            for k in 0..i {
                // SAFETY: logical `k < i <= len` is live; its destination is
                // either the free slot before the head or the slot vacated by `k - 1`.
                unsafe { self.relocate(Self::wrap(old_head + k), Self::wrap(new_head + k)) };
            }
            self.head = new_head;
        } else {
            // Slide [i, len) one slot toward the back.
            for k in (i..self.len).rev() {
                // SAFETY: logical `k` is live; `k + 1 <= len < N` is either the
                // free tail slot or the slot vacated by `k + 1`.
                unsafe { self.relocate(self.slot(k), self.slot(k + 1)) };
            }
        }
        let p = self.slot(i);
        self.buf[p].write(value);
        self.len += 1;
        Ok(())
    }

    /// Removes the element at logical index `i`, closing the gap from the shorter side.
    pub fn remove(&mut self, i: usize) -> Option<T> {
        if i >= self.len {
            return None;
        }
        // SAFETY: `i < len`; the slot is treated as vacant from here on.
        let value = unsafe { self.buf[self.slot(i)].assume_init_read() };
        if i < self.len - 1 - i {
            for k in (0..i).rev() {
                // SAFETY: logical `k` is live and `k + 1` was vacated.
                unsafe { self.relocate(self.slot(k), self.slot(k + 1)) };
            }
            self.head = Self::wrap(self.head + 1);
        } else {
            for k in i + 1..self.len {
                // SAFETY: logical `k` is live and `k - 1` was vacated.
                unsafe { self.relocate(self.slot(k), self.slot(k - 1)) };
            }
        }
        self.len -= 1;
        Some(value)
    }

    /// Swaps the elements at logical indices `i` and `j`.
    ///
    /// Returns `false` without touching anything if either index is out of range.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.len || j >= self.len {
            return false;
        }
        let (a, b) = (self.slot(i), self.slot(j));
        self.buf.swap(a, b);
        true
    }

    /// Drops every live element and rewinds the head.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let head = mem::replace(&mut self.head, 0);
        for k in 0..len {
            // SAFETY: the first `len` logical slots were live; `self.len` is
            // already zero so a panicking destructor cannot cause a double drop.
            unsafe { self.buf[Self::wrap(head + k)].assume_init_drop() };
        }
    }

    /// Returns the live run as two slices, front part first.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first_len = self.len.min(N - self.head);
        let first = &self.buf[self.head..self.head + first_len];
        let second = &self.buf[..self.len - first_len];
        // SAFETY: both ranges cover exactly the live slots.
        unsafe { (assume_init_slice(first), assume_init_slice(second)) }
    }

    /// Returns the live run as two mutable slices, front part first.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let first_len = self.len.min(N - self.head);
        let second_len = self.len - first_len;
        let (left, right) = self.buf.split_at_mut(self.head);
        // SAFETY: both ranges cover exactly the live slots and do not overlap.
        unsafe {
            (
                assume_init_slice_mut(&mut right[..first_len]),
                assume_init_slice_mut(&mut left[..second_len]),
            )
        }
    }

    /// Iterates over the live elements in logical order.
    pub fn iter(&self) -> SegmentIter<'_, T> {
        let (a, b) = self.as_slices();
        SegmentIter {
            front: a.iter(),
            back: b.iter(),
        }
    }
}

/// Iterator over the live run of a [`Segment`].
pub struct SegmentIter<'a, T> {
    front: core::slice::Iter<'a, T>,
    back: core::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SegmentIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.front.len() + self.back.len();
        (n, Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for SegmentIter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<'a, T> ExactSizeIterator for SegmentIter<'a, T> {}
impl<'a, T> FusedIterator for SegmentIter<'a, T> {}

impl<T, const N: usize> Default for Segment<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for Segment<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Segment<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.as_slices();
        f.debug_list().entries(a).entries(b).finish()
    }
}

fn new_uninit_block<T, const N: usize>() -> Box<[MaybeUninit<T>; N]> {
    // Avoid building a potentially large array on the stack.
    //
    // SAFETY: an uninitialized `[MaybeUninit<T>; N]` is valid; slots are
    // written individually and only live ones are ever read or dropped.
    unsafe { Box::<[MaybeUninit<T>; N]>::new_uninit().assume_init() }
}

/// # Safety
/// Every element of `s` must be initialized.
#[inline(always)]
unsafe fn assume_init_slice<T>(s: &[MaybeUninit<T>]) -> &[T] {
    &*(s as *const [MaybeUninit<T>] as *const [T])
}

/// # Safety
/// Every element of `s` must be initialized.
#[inline(always)]
unsafe fn assume_init_slice_mut<T>(s: &mut [MaybeUninit<T>]) -> &mut [T] {
    &mut *(s as *mut [MaybeUninit<T>] as *mut [T])
}
