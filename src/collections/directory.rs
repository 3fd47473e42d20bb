//! `Directory` — a fixed-capacity ring buffer of ownership slots.
//!
//! The deque keeps its segments here. In-use slots form the circular run
//! `[begin, begin + len)`; every other slot is `None`. All wrap arithmetic for
//! segment addressing lives in this type, so callers only ever speak in
//! logical indices `0..len`.
//!
//! The directory never grows on its own: `push_*` hand the value back when the
//! ring is full, and the owner decides when to [`resize`](Directory::resize).
//! Re-layout moves slot contents into a fresh array starting at physical slot
//! 0; the values themselves are moved, not cloned.

use core::iter::{Chain, Take};
use core::slice;

/// A circular array of owned slots addressed by logical index.
pub struct Directory<S> {
    slots: Box<[Option<S>]>,
    begin: usize,
    len: usize,
}

impl<S> Directory<S> {
    /// Creates a directory with zero capacity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a directory with `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            begin: 0,
            len: 0,
        }
    }

    /// Returns the number of slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Physical slot of the first occupied entry.
    #[inline]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Physical slot one past the last occupied entry.
    #[inline]
    pub fn end(&self) -> usize {
        if self.slots.is_empty() {
            0
        } else {
            self.physical(self.len % self.slots.len())
        }
    }

    /// Maps logical index `i < capacity` to its physical slot.
    #[inline(always)]
    fn physical(&self, i: usize) -> usize {
        let p = self.begin + i;
        let cap = self.slots.len();
        if p >= cap {
            p - cap
        } else {
            p
        }
    }

    /// Returns the entry at logical index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&S> {
        if i >= self.len {
            return None;
        }
        self.slots[self.physical(i)].as_ref()
    }

    /// Returns the entry at logical index `i` mutably.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut S> {
        if i >= self.len {
            return None;
        }
        let p = self.physical(i);
        self.slots[p].as_mut()
    }

    /// Returns the first entry.
    #[inline]
    pub fn first(&self) -> Option<&S> {
        self.get(0)
    }

    /// Returns the last entry.
    #[inline]
    pub fn last(&self) -> Option<&S> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns the first entry mutably.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut S> {
        self.get_mut(0)
    }

    /// Returns the last entry mutably.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut S> {
        match self.len.checked_sub(1) {
            Some(i) => self.get_mut(i),
            None => None,
        }
    }

    /// Returns two distinct entries mutably, in argument order.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> Option<(&mut S, &mut S)> {
        if i == j || i >= self.len || j >= self.len {
            return None;
        }
        let (pi, pj) = (self.physical(i), self.physical(j));
        if pi < pj {
            let (lo, hi) = self.slots.split_at_mut(pj);
            Some((lo[pi].as_mut()?, hi[0].as_mut()?))
        } else {
            let (lo, hi) = self.slots.split_at_mut(pi);
            let right = lo[pj].as_mut()?;
            Some((hi[0].as_mut()?, right))
        }
    }

    /// Occupies the slot after the last entry.
    ///
    /// Hands `value` back when the ring is full.
    pub fn push_back(&mut self, value: S) -> Result<(), S> {
        if self.is_full() {
            return Err(value);
        }
        let p = self.physical(self.len);
        self.slots[p] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Occupies the slot before the first entry.
    ///
    /// Hands `value` back when the ring is full.
    pub fn push_front(&mut self, value: S) -> Result<(), S> {
        if self.is_full() {
            return Err(value);
        }
        self.begin = if self.begin == 0 {
            self.slots.len() - 1
        } else {
            self.begin - 1
        };
        self.slots[self.begin] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Vacates the first slot.
    pub fn pop_front(&mut self) -> Option<S> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.begin].take();
        self.begin = self.physical(1);
        self.len -= 1;
        value
    }

    /// Vacates the last slot.
    pub fn pop_back(&mut self) -> Option<S> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let p = self.physical(self.len);
        self.slots[p].take()
    }

    /// Moves every entry into a fresh array of `capacity` slots, starting at slot 0.
    ///
    /// Returns `false` and leaves the directory untouched if `capacity < len`.
    pub fn resize(&mut self, capacity: usize) -> bool {
        if capacity < self.len {
            return false;
        }
        let mut slots = empty_slots(capacity);
        for (k, slot) in slots.iter_mut().take(self.len).enumerate() {
            let p = self.physical(k);
            *slot = self.slots[p].take();
        }
        self.slots = slots;
        self.begin = 0;
        true
    }

    /// Iterates over the entries in logical order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &S> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Iterates mutably over the entries in logical order.
    pub fn iter_mut(&mut self) -> IterMut<'_, S> {
        let len = self.len;
        let (wrapped, leading) = self.slots.split_at_mut(self.begin);
        IterMut {
            slots: leading.iter_mut().chain(wrapped.iter_mut()).take(len),
        }
    }

    /// Consumes the directory, yielding entries in logical order.
    pub fn into_entries(mut self) -> impl Iterator<Item = S> {
        core::iter::from_fn(move || self.pop_front())
    }
}

impl<S> Default for Directory<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable iterator over the occupied slots of a [`Directory`].
pub struct IterMut<'a, S> {
    slots: Take<Chain<slice::IterMut<'a, Option<S>>, slice::IterMut<'a, Option<S>>>>,
}

impl<'a, S> Iterator for IterMut<'a, S> {
    type Item = &'a mut S;

    #[inline]
    fn next(&mut self) -> Option<&'a mut S> {
        self.slots.by_ref().find_map(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.slots.size_hint().1)
    }
}

fn empty_slots<S>(capacity: usize) -> Box<[Option<S>]> {
    (0..capacity).map(|_| None).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(dir: &Directory<u32>) -> Vec<u32> {
        dir.iter().copied().collect()
    }

    #[test]
    fn zero_capacity_rejects_pushes() {
        let mut dir: Directory<u32> = Directory::new();
        assert_eq!(dir.capacity(), 0);
        assert!(dir.is_full());
        assert_eq!(dir.push_back(1), Err(1));
        assert_eq!(dir.push_front(2), Err(2));
        assert_eq!(dir.pop_front(), None);
        assert_eq!(dir.end(), 0);
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut dir: Directory<u32> = Directory::with_capacity(4);
        dir.push_back(1).unwrap();
        dir.push_back(2).unwrap();
        dir.push_front(0).unwrap();
        assert_eq!(dir.begin(), 3);
        assert_eq!(dir.end(), 2);
        assert_eq!(contents(&dir), vec![0, 1, 2]);
        assert_eq!(dir.first(), Some(&0));
        assert_eq!(dir.last(), Some(&2));

        dir.push_front(9).unwrap();
        assert!(dir.is_full());
        assert_eq!(dir.push_back(5), Err(5));
        assert_eq!(contents(&dir), vec![9, 0, 1, 2]);

        assert_eq!(dir.pop_back(), Some(2));
        assert_eq!(dir.pop_front(), Some(9));
        assert_eq!(contents(&dir), vec![0, 1]);
        assert_eq!(dir.get(2), None);
    }

    #[test]
    fn pair_mut_in_either_order() {
        let mut dir: Directory<u32> = Directory::with_capacity(4);
        dir.push_back(1).unwrap();
        dir.push_back(2).unwrap();
        dir.push_front(0).unwrap();

        let (a, b) = dir.pair_mut(0, 2).unwrap();
        assert_eq!((*a, *b), (0, 2));
        core::mem::swap(a, b);
        let (a, b) = dir.pair_mut(2, 1).unwrap();
        assert_eq!((*a, *b), (0, 1));
        assert!(dir.pair_mut(1, 1).is_none());
        assert!(dir.pair_mut(0, 3).is_none());
        assert_eq!(contents(&dir), vec![2, 1, 0]);
    }

    #[test]
    fn resize_relayouts_from_zero() {
        let mut dir: Directory<u32> = Directory::with_capacity(3);
        dir.push_back(1).unwrap();
        dir.push_front(0).unwrap();
        assert_eq!(dir.begin(), 2);

        assert!(dir.resize(8));
        assert_eq!(dir.capacity(), 8);
        assert_eq!(dir.begin(), 0);
        assert_eq!(dir.end(), 2);
        assert_eq!(contents(&dir), vec![0, 1]);

        assert!(!dir.resize(1));
        assert!(dir.resize(2));
        assert!(dir.is_full());
        assert_eq!(contents(&dir), vec![0, 1]);
    }

    #[test]
    fn iter_mut_follows_logical_order() {
        let mut dir: Directory<u32> = Directory::with_capacity(4);
        for v in [2, 3] {
            dir.push_back(v).unwrap();
        }
        for v in [1, 0] {
            dir.push_front(v).unwrap();
        }
        for (k, v) in dir.iter_mut().enumerate() {
            *v += 10 * k as u32;
        }
        assert_eq!(contents(&dir), vec![0, 11, 22, 33]);
        assert_eq!(dir.iter().rev().copied().collect::<Vec<_>>(), vec![33, 22, 11, 0]);
        assert_eq!(dir.into_entries().collect::<Vec<_>>(), vec![0, 11, 22, 33]);
    }
}
