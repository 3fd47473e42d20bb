//! Standard iterators for `SegmentedDeque`.

use core::iter::FusedIterator;
use core::ops::Range;
use core::slice;

use super::SegmentedDeque;
use crate::collections::directory;
use crate::collections::segment::Segment;

/// Shared iterator over a [`SegmentedDeque`], front to back.
pub struct Iter<'a, T, const N: usize> {
    deque: &'a SegmentedDeque<T, N>,
    range: Range<usize>,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let i = self.range.next()?;
        self.deque.get(i)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let i = self.range.nth(n)?;
        self.deque.get(i)
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        let i = self.range.next_back()?;
        self.deque.get(i)
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for Iter<'a, T, N> {}
impl<'a, T, const N: usize> FusedIterator for Iter<'a, T, N> {}

impl<'a, T, const N: usize> Clone for Iter<'a, T, N> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            range: self.range.clone(),
        }
    }
}

/// Mutable iterator over a [`SegmentedDeque`], front to back.
///
/// Walks segment by segment, so each step is a slice iterator step.
pub struct IterMut<'a, T, const N: usize> {
    segments: directory::IterMut<'a, Segment<T, N>>,
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
    remaining: usize,
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(x) = self.front.next() {
                self.remaining -= 1;
                return Some(x);
            }
            if let Some(x) = self.back.next() {
                self.remaining -= 1;
                return Some(x);
            }
            let (a, b) = self.segments.next()?.as_mut_slices();
            self.front = a.iter_mut();
            self.back = b.iter_mut();
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for IterMut<'a, T, N> {}
impl<'a, T, const N: usize> FusedIterator for IterMut<'a, T, N> {}

/// Owning iterator that drains a [`SegmentedDeque`] from either end.
pub struct IntoIter<T, const N: usize> {
    deque: SegmentedDeque<T, N>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> SegmentedDeque<T, N> {
    /// Iterates over the elements front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            deque: self,
            range: 0..self.len,
        }
    }

    /// Iterates mutably over the elements front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut {
            remaining: self.len,
            segments: self.directory.iter_mut(),
            front: slice::IterMut::default(),
            back: slice::IterMut::default(),
        }
    }

    /// Applies `f` to every element, front to back.
    #[inline]
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for segment in self.directory.iter_mut() {
            let (a, b) = segment.as_mut_slices();
            a.iter_mut().chain(b.iter_mut()).for_each(&mut f);
        }
    }
}

impl<T, const N: usize> IntoIterator for SegmentedDeque<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a SegmentedDeque<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut SegmentedDeque<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> FromIterator<T> for SegmentedDeque<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, const N: usize> Extend<T> for SegmentedDeque<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for SegmentedDeque<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
