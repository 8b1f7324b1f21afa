// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buffer::BoundedBuffer;

impl<T: Copy, const N: usize> BoundedBuffer<T, N> {
    /// The occupied prefix. Every read path (search, indexing, iteration,
    /// serialization) goes through here, so stale slots past `len` stay hidden.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }
}
