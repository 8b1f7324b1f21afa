// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buffer::BoundedBuffer;

// Unused slots start as `T::default()`.
impl<T: Copy + Default, const N: usize> Default for BoundedBuffer<T, N> {
    fn default() -> Self {
        Self {
            buf: [T::default(); N],
            len: 0,
        }
    }
}
