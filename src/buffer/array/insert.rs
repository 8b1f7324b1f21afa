// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::BoundedBuffer, error::Error};

impl<T: Copy, const N: usize> BoundedBuffer<T, N> {
    /// Opens a gap at `index` by moving `[index, len)` one slot towards the
    /// tail, then writes `value` into it.
    ///
    /// `OrderedArray::insert` passes the slot found by its forward scan, so
    /// `index == len` (append) is the common case for ascending input and
    /// costs no moves. `index > len` would leave a hole and is rejected with
    /// [`Error::OutOfBounds`]; a full buffer gives [`Error::Full`]. Neither
    /// error touches the buffer.
    #[inline]
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        if self.len == N {
            return Err(Error::Full);
        }
        let len = self.len;

        // Shift up: [index..len) -> [index+1..len+1)
        self.buf.copy_within(index..len, index + 1);
        self.buf[index] = value;

        self.len = len + 1;
        Ok(())
    }
}
