// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `StackArray`: a bounded stack over the inline fixed-capacity buffer.

// Crate imports
use crate::{buffer::BoundedBuffer, error::Error, iter::IntoIter, stack::Stack};

// Core imports
use core::{fmt, iter::Rev};

/// A LIFO stack of at most `N` `Copy` elements, stored inline.
///
/// The top of the stack is the highest occupied slot: an empty stack has no
/// top, and a full stack has its top at slot `N - 1`. `pop` only moves the
/// cursor; the vacated slot keeps its stale value until overwritten.
///
/// All [`Stack`] operations are `O(1)`, including `len`.
///
/// # Examples
///
/// ```rust
/// use bounded_seq::{Error, Stack, StackArray};
///
/// let mut s: StackArray<i32, 2> = StackArray::new();
/// s.push(1).unwrap();
/// s.push(2).unwrap();
/// assert!(s.is_full());
/// assert_eq!(s.push(3), Err(Error::Full));
/// assert_eq!(s.pop(), Ok(2));
/// ```
pub struct StackArray<T: Copy, const N: usize> {
    buf: BoundedBuffer<T, N>,
}

impl<T: Copy, const N: usize> StackArray<T, N> {
    /// The fixed capacity of this stack.
    pub const CAPACITY: usize = N;

    /// Constructs an empty stack.
    ///
    /// In the default backend this requires `T: Default`; use
    /// [`new_with`](Self::new_with) otherwise.
    #[inline]
    pub fn new() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Constructs an empty stack with the backing buffer filled with `fill`.
    #[inline]
    pub const fn new_with(fill: T) -> Self {
        Self {
            buf: BoundedBuffer::new_with(fill),
        }
    }

    /// Returns the capacity (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if another `push` would fail with [`Error::Full`].
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    /// Iterates from the top of the stack to the bottom.
    #[inline]
    pub fn iter(&self) -> Rev<core::slice::Iter<'_, T>> {
        self.as_slice().iter().rev()
    }

    /// Removes every element; capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Bottom-to-top view of the stored elements.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }
}

impl<T: Copy, const N: usize> Stack<T> for StackArray<T, N> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn push(&mut self, value: T) -> Result<(), Error> {
        self.buf.push(value).inspect_err(|_| {
            tracing::debug!(
                container = "StackArray",
                capacity = N,
                "push rejected: capacity exceeded"
            );
        })
    }

    fn pop(&mut self) -> Result<T, Error> {
        self.buf.pop().ok_or_else(|| {
            tracing::debug!(container = "StackArray", "pop rejected: stack is empty");
            Error::Empty
        })
    }

    fn peek(&self) -> Result<&T, Error> {
        self.buf.last().ok_or_else(|| {
            tracing::debug!(container = "StackArray", "peek rejected: stack is empty");
            Error::Empty
        })
    }
}

#[cfg(not(feature = "unsafe-maybe-uninit"))]
impl<T: Copy + Default, const N: usize> Default for StackArray<T, N> {
    fn default() -> Self {
        Self {
            buf: BoundedBuffer::default(),
        }
    }
}
#[cfg(feature = "unsafe-maybe-uninit")]
impl<T: Copy, const N: usize> Default for StackArray<T, N> {
    fn default() -> Self {
        Self {
            buf: BoundedBuffer::default(),
        }
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for StackArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackArray")
            .field("len", &self.buf.len())
            .field("top", &self.buf.last())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for StackArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}
impl<T: Copy + Eq, const N: usize> Eq for StackArray<T, N> {}

impl<T: Copy, const N: usize> Copy for StackArray<T, N> {}
impl<T: Copy, const N: usize> Clone for StackArray<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

/// Yields by value in pop order (top first).
impl<T: Copy, const N: usize> IntoIterator for StackArray<T, N> {
    type Item = T;
    type IntoIter = Rev<IntoIter<T, N>>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buf).rev()
    }
}
