// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buffer::BoundedBuffer;

impl<T: Copy, const N: usize> BoundedBuffer<T, N> {
    /// Stack pop: moves the `len` cursor down one and hands back the old top.
    /// The slot keeps its value until the next push overwrites it.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, all elements in `buf[..old_len]` are
            // initialized by invariant, so `buf[self.len]` (the old last slot)
            // still contains an initialized `T`.
            let out = unsafe { self.buf[self.len].assume_init() };
            Some(out)
        }
    }
}
