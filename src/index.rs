// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`UnorderedArray`] and [`OrderedArray`].
//!
//! These impls mirror slice behavior:
//! - panics on out-of-bounds (use `get` / `try_get` for a checked read);
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the occupied prefix `[0..len)`.
//!
//! Only `Index` is provided. `IndexMut` would let callers overwrite elements
//! of an `OrderedArray` out of order.

// Crate imports
use crate::{ordered::OrderedArray, unordered::UnorderedArray};

// Core imports
use core::ops::{
    Index, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

macro_rules! impl_prefix_index {
    (@range $container:ident, $range:ty) => {
        impl<T: Copy, const N: usize> Index<$range> for $container<T, N> {
            type Output = [T];
            fn index(&self, r: $range) -> &Self::Output {
                &self.as_slice()[r]
            }
        }
    };
    ($container:ident) => {
        impl<T: Copy, const N: usize> Index<usize> for $container<T, N> {
            type Output = T;
            fn index(&self, i: usize) -> &Self::Output {
                &self.as_slice()[i]
            }
        }

        impl_prefix_index!(@range $container, Range<usize>);
        impl_prefix_index!(@range $container, RangeFrom<usize>);
        impl_prefix_index!(@range $container, RangeTo<usize>);
        impl_prefix_index!(@range $container, RangeToInclusive<usize>);
        impl_prefix_index!(@range $container, RangeInclusive<usize>);
        impl_prefix_index!(@range $container, RangeFull);
    };
}

impl_prefix_index!(UnorderedArray);
impl_prefix_index!(OrderedArray);
