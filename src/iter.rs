// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! By-value iteration over the bounded containers.
//!
//! - [`IntoIter<T, N>`] yields the occupied prefix by value and supports
//!   `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//! - `&UnorderedArray` / `&OrderedArray` iterate as slices.
//! - [`StackArray`](crate::StackArray) iterates by value in pop order
//!   (top to bottom), i.e. an `IntoIter` run backwards.

// Crate imports
use crate::buffer::BoundedBuffer;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator over a copy of a bounded container's occupied prefix.
///
/// Yields elements by value from front (index 0) to back.
pub struct IntoIter<T: Copy, const N: usize> {
    pub(crate) buf: BoundedBuffer<T, N>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T: Copy, const N: usize> IntoIter<T, N> {
    pub(crate) fn new(buf: BoundedBuffer<T, N>) -> Self {
        Self {
            front: 0,
            back: buf.len(),
            buf,
        }
    }
}

impl<T: Copy, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(self.buf.as_slice()[i])
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T: Copy, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.buf.as_slice()[self.back])
        } else {
            None
        }
    }
}
impl<T: Copy, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T: Copy, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
