// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the bounded containers and stacks.
//!
//! Every variant describes a violated precondition. The container that
//! reported it is left exactly as it was before the call.

/// Errors returned by container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    ///
    /// Returned by `insert` / `push` on a full bounded container.
    #[error("capacity exceeded")]
    Full,
    /// `pop` or `peek` was called on an empty stack.
    #[error("empty structure access")]
    Empty,
    /// An index was outside the occupied prefix `[0, len)`.
    #[error("index out of bounds")]
    OutOfBounds,
}
