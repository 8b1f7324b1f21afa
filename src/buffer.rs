// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed-capacity arena shared by every bounded container.
//!
//! `BoundedBuffer<T, N>` is a backing buffer of `N` slots plus an explicit
//! `len` cursor. Only the prefix `buf[..len]` is occupied; the tail holds
//! stale values that are never observable. Shifting is done with explicit
//! index-range moves (`copy_within`) so the `O(len)` cost stays visible.
//!
//! No heap allocations are performed.

#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod array;
#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A fixed-capacity, inline buffer for `Copy` elements.
///
/// # Layout and invariants
///
/// - a backing buffer of capacity `N` (either `[T; N]` or
///   `[MaybeUninit<T>; N]`, depending on the backend);
/// - a logical length `len` with `0 <= len <= N`.
///
/// Every method keeps the occupied slots packed at `[0, len)`: there is never
/// a hole below an occupied slot.
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub(crate) struct BoundedBuffer<T: Copy, const N: usize> {
    pub(crate) buf: [T; N],
    pub(crate) len: usize,
}
#[cfg(feature = "unsafe-maybe-uninit")]
pub(crate) struct BoundedBuffer<T: Copy, const N: usize> {
    pub(crate) buf: [core::mem::MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T: Copy, const N: usize> BoundedBuffer<T, N> {
    /// Returns the capacity of this buffer (always `N`).
    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub(crate) fn get(&self, i: usize) -> Option<&T> {
        (i < self.len).then(|| &self.as_slice()[i])
    }

    /// Returns the element in the highest occupied slot, if any.
    #[inline]
    pub(crate) fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Sets `len = 0` without altering the underlying values.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuffer")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for BoundedBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Copy + Eq, const N: usize> Eq for BoundedBuffer<T, N> {}
impl<T: Copy + Hash, const N: usize> Hash for BoundedBuffer<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for BoundedBuffer<T, N> {}
impl<T: Copy, const N: usize> Clone for BoundedBuffer<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::BoundedBuffer;
    use crate::Error;

    fn filled<const N: usize>(values: &[i32]) -> BoundedBuffer<i32, N> {
        let mut b = BoundedBuffer::new_with(0);
        for &v in values {
            b.push(v).unwrap();
        }
        b
    }

    #[test]
    fn test_push_pop() {
        let mut b: BoundedBuffer<u8, 2> = BoundedBuffer::default();
        b.push(1).unwrap();
        b.push(2).unwrap();
        assert_eq!(b.push(9), Err(Error::Full));
        assert_eq!(b.pop(), Some(2));
        assert_eq!(b.pop(), Some(1));
        assert_eq!(b.pop(), None);
    }

    #[test]
    fn test_default_and_capacity() {
        let b: BoundedBuffer<i32, 4> = BoundedBuffer::default();
        assert_eq!(b.len(), 0);
        assert_eq!(b.capacity(), 4);
        assert!(b.is_empty());
        assert!(!b.is_full());
    }

    #[test]
    fn test_full_push_is_noop() {
        let mut b = filled::<2>(&[10, 20]);
        assert!(b.is_full());
        assert_eq!(b.push(30), Err(Error::Full));
        assert_eq!(b.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_insert_shifts_tail_up() {
        let mut b = filled::<5>(&[10, 20, 30]);
        b.insert(1, 15).unwrap();
        assert_eq!(b.as_slice(), &[10, 15, 20, 30]);
        b.insert(4, 35).unwrap();
        assert_eq!(b.as_slice(), &[10, 15, 20, 30, 35]);
        assert_eq!(b.insert(0, 0), Err(Error::Full));
        assert_eq!(b.as_slice(), &[10, 15, 20, 30, 35]);
    }

    #[test]
    fn test_insert_past_len_errors() {
        let mut b = filled::<3>(&[1, 2]);
        assert_eq!(b.insert(3, 9), Err(Error::OutOfBounds));
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_remove_shifts_tail_down() {
        let mut b = filled::<5>(&[1, 2, 3, 4, 5]);
        assert_eq!(b.remove(2), Some(3));
        assert_eq!(b.as_slice(), &[1, 2, 4, 5]);
        assert_eq!(b.remove(0), Some(1));
        assert_eq!(b.as_slice(), &[2, 4, 5]);
        assert_eq!(b.remove(1), Some(4));
        assert_eq!(b.as_slice(), &[2, 5]);
        assert_eq!(b.remove(1), Some(5));
        assert_eq!(b.as_slice(), &[2]);
        assert_eq!(b.remove(8), None);
    }

    #[test]
    fn test_get_and_last_ignore_stale_tail() {
        let mut b = filled::<4>(&[7, 8, 9]);
        let _ = b.pop();
        assert_eq!(b.get(1), Some(&8));
        assert_eq!(b.get(2), None);
        assert_eq!(b.last(), Some(&8));
        b.clear();
        assert_eq!(b.last(), None);
    }

    #[test]
    fn zero_capacity_buffer_behaves() {
        let mut b: BoundedBuffer<u8, 0> = BoundedBuffer::default();
        assert!(b.is_empty());
        assert!(b.is_full());
        assert_eq!(b.push(1), Err(Error::Full));
        assert_eq!(b.pop(), None);
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn test_clone_is_independent_copy() {
        let a = filled::<3>(&[1, 2]);
        let mut b = a.clone();
        b.push(3).unwrap();
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_ne!(a, b);
    }
}
