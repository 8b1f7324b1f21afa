// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buffer::BoundedBuffer;

impl<T: Copy, const N: usize> BoundedBuffer<T, N> {
    /// Takes the element at `index` out and closes the gap by moving
    /// `[index + 1, len)` one slot towards the front.
    ///
    /// Both arrays delete through this, which is what keeps their occupied
    /// slots packed at `[0, len)` and the survivors in their relative order.
    /// `None` for an index outside the occupied prefix.
    #[inline]
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;
        let out = self.buf[index];

        // Shift down: [index+1..len) -> [index..len-1)
        self.buf.copy_within(index + 1..len, index);

        self.len = len - 1;
        Some(out)
    }
}
