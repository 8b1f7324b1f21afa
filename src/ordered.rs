// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `OrderedArray` type: a bounded array kept sorted at all times.
//!
//! Insertion finds its slot with a single forward scan and shifts the tail
//! up; deletion scans forward only until the target would already have been
//! passed, then shifts the tail down. Membership queries run
//! [`binary_search_iterative`](crate::binary_search_iterative) over the
//! occupied prefix.

// Crate imports
use crate::{buffer::BoundedBuffer, error::Error, iter::IntoIter, search};

// Core imports
use core::{cmp::Ordering, fmt, hash::Hash};

/// A fixed-capacity array whose occupied prefix is always sorted ascending.
///
/// # Invariants
///
/// - `0 <= len() <= N`;
/// - occupied slots are exactly `[0, len())`;
/// - `get(i) <= get(i + 1)` for every `i + 1 < len()`, after every operation.
///
/// Equal elements are allowed. A newly inserted value is placed **before**
/// any existing equal elements.
///
/// There is no mutable access to stored elements, since writing through it
/// could break the ordering.
///
/// # Complexity
///
/// - [`insert`](Self::insert): `O(len)` (linear scan for the slot plus shift).
/// - [`binary_search`](Self::binary_search): `O(log len)`.
/// - [`delete`](Self::delete): `O(len)`, stopping the scan early.
///
/// # Examples
///
/// ```rust
/// use bounded_seq::OrderedArray;
///
/// let mut a: OrderedArray<i32, 5> = OrderedArray::new();
/// for v in [51, 5, 8, 46, 2] {
///     a.insert(v).unwrap();
/// }
/// assert_eq!(a.as_slice(), &[2, 5, 8, 46, 51]);
/// assert!(a.binary_search(&46));
/// assert!(a.delete(&2));
/// assert!(!a.binary_search(&2));
/// ```
pub struct OrderedArray<T: Copy, const N: usize> {
    buf: BoundedBuffer<T, N>,
}

impl<T: Copy, const N: usize> OrderedArray<T, N> {
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

    /// Returns the smallest element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the largest element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Returns the occupied prefix as a sorted slice.
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

impl<T: Copy + Ord, const N: usize> OrderedArray<T, N> {
    /// Inserts `value` at its sorted position.
    ///
    /// Scans forward while `value` is greater than the current element, then
    /// shifts `[k, len)` up one slot and writes `value` at `k`.
    ///
    /// Returns [`Error::Full`] if `len() == N`; the array is left unchanged.
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        if self.buf.is_full() {
            tracing::debug!(
                container = "OrderedArray",
                capacity = N,
                "insert rejected: capacity exceeded"
            );
            return Err(Error::Full);
        }
        let slot = self
            .as_slice()
            .iter()
            .position(|e| value <= *e)
            .unwrap_or(self.len());
        self.buf.insert(slot, value)
    }

    /// Returns `true` if `value` is stored, using binary search over
    /// `[0, len())`.
    #[inline]
    pub fn binary_search(&self, value: &T) -> bool {
        search::binary_search_iterative(self.as_slice(), value)
    }

    /// Alias for [`binary_search`](Self::binary_search).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.binary_search(value)
    }

    /// Deletes one element equal to `value` (the first in sorted order).
    ///
    /// The scan stops at the first element that is not smaller than `value`;
    /// an exact match is removed by shifting the tail down. Returns `false`,
    /// without mutating, when `value` is absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let stop = self
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, e)| (i, value.cmp(e)))
            .find(|&(_, ordering)| ordering != Ordering::Greater);
        match stop {
            Some((index, Ordering::Equal)) => self.buf.remove(index).is_some(),
            _ => false,
        }
    }
}

#[cfg(not(feature = "unsafe-maybe-uninit"))]
impl<T: Copy + Default, const N: usize> Default for OrderedArray<T, N> {
    fn default() -> Self {
        Self {
            buf: BoundedBuffer::default(),
        }
    }
}
#[cfg(feature = "unsafe-maybe-uninit")]
impl<T: Copy, const N: usize> Default for OrderedArray<T, N> {
    fn default() -> Self {
        Self {
            buf: BoundedBuffer::default(),
        }
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for OrderedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedArray")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for OrderedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}
impl<T: Copy + Eq, const N: usize> Eq for OrderedArray<T, N> {}
impl<T: Copy + Hash, const N: usize> Hash for OrderedArray<T, N> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.buf.hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for OrderedArray<T, N> {}
impl<T: Copy, const N: usize> Clone for OrderedArray<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a OrderedArray<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T: Copy, const N: usize> IntoIterator for OrderedArray<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.buf)
    }
}
