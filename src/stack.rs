// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Stack` contract and its two storage strategies.
//!
//! | type                 | storage                  | capacity | `len()` |
//! |----------------------|--------------------------|----------|---------|
//! | [`StackArray`]       | inline fixed buffer      | `N`      | `O(1)`  |
//! | [`StackLinkedList`]  | singly linked heap nodes | unbounded| `O(n)`  |
//!
//! Callers that only need LIFO behavior should program against [`Stack`].
//! The two implementations are observably identical for any legal sequence of
//! calls, except that `StackArray::push` can fail with [`Error::Full`] and
//! only `StackArray` has `is_full`.

pub(crate) mod array;
pub(crate) mod linked_list;

// Crate imports
use crate::error::Error;

pub use array::StackArray;
pub use linked_list::{ListIntoIter, ListIter, StackLinkedList};

/// Last-in, first-out capability set.
///
/// `pop` and `peek` on an empty stack return [`Error::Empty`] and leave the
/// stack unchanged; check [`is_empty`](Stack::is_empty) first when the
/// emptiness is not already known.
///
/// # Examples
///
/// ```rust
/// use bounded_seq::{Stack, StackArray, StackLinkedList};
///
/// fn drain<S: Stack<i32>>(mut s: S) -> [i32; 3] {
///     for v in [10, 20, 30] {
///         s.push(v).unwrap();
///     }
///     [s.pop().unwrap(), s.pop().unwrap(), s.pop().unwrap()]
/// }
///
/// assert_eq!(drain(StackArray::<i32, 3>::new()), [30, 20, 10]);
/// assert_eq!(drain(StackLinkedList::new()), [30, 20, 10]);
/// ```
pub trait Stack<T> {
    /// Returns `true` if the stack holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    ///
    /// The cost depends on the implementation; see the module docs.
    fn len(&self) -> usize;

    /// Places `value` on top.
    fn push(&mut self, value: T) -> Result<(), Error>;

    /// Removes and returns the top element.
    fn pop(&mut self) -> Result<T, Error>;

    /// Returns the top element without removing it.
    fn peek(&self) -> Result<&T, Error>;
}
