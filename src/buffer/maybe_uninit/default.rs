// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::buffer::BoundedBuffer;

// Core imports
use core::mem::MaybeUninit;

// No `T: Default` needed: unused slots are left uninitialized.
impl<T: Copy, const N: usize> Default for BoundedBuffer<T, N> {
    fn default() -> Self {
        Self {
            buf: [MaybeUninit::<T>::uninit(); N],
            len: 0,
        }
    }
}
