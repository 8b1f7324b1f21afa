// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buffer::BoundedBuffer;

// Core imports
use core::mem::MaybeUninit;

impl<T: Copy, const N: usize> BoundedBuffer<T, N> {
    /// Empty buffer for element types without a usable `Default`: `fill` only
    /// pads the unused slots and no accessor can reach it.
    #[inline]
    pub(crate) const fn new_with(fill: T) -> Self {
        Self {
            buf: [MaybeUninit::new(fill); N],
            len: 0,
        }
    }
}
