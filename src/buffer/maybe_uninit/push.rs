// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::BoundedBuffer, error::Error};

impl<T: Copy, const N: usize> BoundedBuffer<T, N> {
    /// Append at the `len` cursor. Used for stack pushes and for
    /// `UnorderedArray::insert`; a full buffer gives [`Error::Full`].
    #[inline]
    pub(crate) fn push(&mut self, v: T) -> Result<(), Error> {
        if self.len == N {
            return Err(Error::Full);
        }

        self.buf[self.len].write(v);

        self.len += 1;
        Ok(())
    }
}
