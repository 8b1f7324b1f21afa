// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `UnorderedArray` type: a bounded array kept in insertion order.
//!
//! Elements are appended at the end of the occupied prefix, found by a linear
//! scan using `PartialEq`, and deleted by shifting every later element down
//! one slot, so the prefix `[0, len)` never contains a hole.

// Crate imports
use crate::{buffer::BoundedBuffer, error::Error, iter::IntoIter};

// Core imports
use core::{fmt, hash::Hash};

/// A fixed-capacity array that keeps elements in insertion order.
///
/// # Invariants
///
/// - `0 <= len() <= N`;
/// - occupied slots are exactly `[0, len())`;
/// - relative order is insertion order; deleting an element preserves the
///   relative order of the rest.
///
/// # Complexity
///
/// - [`insert`](Self::insert): `O(1)`;
/// - [`search`](Self::search) / [`contains`](Self::contains): `O(len)`;
/// - [`delete`](Self::delete): `O(len)` (scan plus shift).
///
/// # Examples
///
/// ```rust
/// use bounded_seq::UnorderedArray;
///
/// let mut a: UnorderedArray<i32, 6> = UnorderedArray::new();
/// for v in [7, 9, 3, 11, 8, 4] {
///     a.insert(v).unwrap();
/// }
/// assert!(a.delete(&7));
/// assert!(a.delete(&3));
/// assert!(a.delete(&4));
/// assert_eq!(a.as_slice(), &[9, 11, 8]);
/// ```
pub struct UnorderedArray<T: Copy, const N: usize> {
    buf: BoundedBuffer<T, N>,
}

impl<T: Copy, const N: usize> UnorderedArray<T, N> {
    /// The fixed capacity of this array.
    pub const CAPACITY: usize = N;

    /// Constructs an empty array.
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

    /// Constructs an empty array with the backing buffer filled with `fill`.
    ///
    /// The fill value is never observable; the initial length is `0`.
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

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.buf.is_full()
    }

    /// Appends `value` after the last occupied slot.
    ///
    /// Returns [`Error::Full`] if `len() == N`; the array is left unchanged.
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        self.buf.push(value).inspect_err(|_| {
            tracing::debug!(
                container = "UnorderedArray",
                capacity = N,
                "insert rejected: capacity exceeded"
            );
        })
    }

    /// Returns `Some(&T)` if `index < len()`, otherwise `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Fallible variant of [`get`](Self::get), returning [`Error::OutOfBounds`]
    /// when `index >= len()`.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::OutOfBounds)
    }

    /// Returns the occupied prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Removes every element (`len = 0`); capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T: Copy + PartialEq, const N: usize> UnorderedArray<T, N> {
    /// Returns the index of the first element equal to `value`, or `None`
    /// when there is none.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().position(|e| e == value)
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Deletes the first element equal to `value`.
    ///
    /// Every element above it shifts down one slot to close the gap. Returns
    /// `false`, without mutating, when `value` is absent.
    pub fn delete(&mut self, value: &T) -> bool {
        match self.search(value) {
            Some(index) => self.buf.remove(index).is_some(),
            None => false,
        }
    }
}

#[cfg(not(feature = "unsafe-maybe-uninit"))]
impl<T: Copy + Default, const N: usize> Default for UnorderedArray<T, N> {
    fn default() -> Self {
        Self {
            buf: BoundedBuffer::default(),
        }
    }
}
#[cfg(feature = "unsafe-maybe-uninit")]
impl<T: Copy, const N: usize> Default for UnorderedArray<T, N> {
    fn default() -> Self {
        Self {
            buf: BoundedBuffer::default(),
        }
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for UnorderedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnorderedArray")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for UnorderedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}
impl<T: Copy + Eq, const N: usize> Eq for UnorderedArray<T, N> {}
impl<T: Copy + Hash, const N: usize> Hash for UnorderedArray<T, N> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.buf.hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for UnorderedArray<T, N> {}
impl<T: Copy, const N: usize> Clone for UnorderedArray<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a UnorderedArray<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T: Copy, const N: usize> IntoIterator for UnorderedArray<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buf)
    }
}
