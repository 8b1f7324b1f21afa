// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-seq`
//!
//! A `no_std` library of small, bounded, in-memory sequence containers and the
//! classic algorithms that go with them, **with no `unsafe` by default**.
//!
//! | type                 | storage              | order            | lookup          |
//! |----------------------|----------------------|------------------|-----------------|
//! | [`UnorderedArray`]   | inline, capacity `N` | insertion order  | linear `search` |
//! | [`OrderedArray`]     | inline, capacity `N` | sorted ascending | `binary_search` |
//! | [`StackArray`]       | inline, capacity `N` | LIFO             | `peek`          |
//! | [`StackLinkedList`]  | heap nodes, unbounded| LIFO             | `peek`          |
//!
//! plus stateless algorithms over slices:
//!
//! - binary search, iterative and recursive, over a whole slice or an
//!   inclusive index range ([`binary_search_iterative`],
//!   [`binary_search_recursive_range`], ...);
//! - bubble, selection and insertion sort, iterative and recursive
//!   ([`bubble_sort_iterative`], ...).
//!
//! ## High-level semantics
//!
//! - Capacity of the bounded containers is the const generic `N`, fixed at
//!   construction. There is no growth.
//! - Occupied slots are always the prefix `[0, len)`: deleting shifts the
//!   tail down, so no container ever has a hole.
//! - `OrderedArray` keeps its prefix sorted after every operation, inserting
//!   new values before existing equal ones.
//! - Both stacks implement the [`Stack`] trait and behave identically for any
//!   legal sequence of calls. `StackLinkedList::len` walks the chain and is
//!   `O(n)`; `StackArray::len` is `O(1)`.
//! - No operation blocks or allocates, except that `StackLinkedList` allocates
//!   one node per push and frees one per pop.
//!
//! ## Errors
//!
//! Precondition violations return an [`Error`] and leave the container
//! unchanged:
//!
//! - [`Error::Full`]: `insert` / `push` on a full bounded container;
//! - [`Error::Empty`]: `pop` / `peek` on an empty stack;
//! - [`Error::OutOfBounds`]: `try_get` past the occupied prefix.
//!
//! A value that is simply not present is not an error: `search` returns
//! `None`, `delete` and `binary_search` return `false`. Indexing with `[]`
//! past `len` panics, exactly like slices.
//!
//! Rejected operations emit a `tracing` event at `DEBUG` level. The crate never
//! installs a subscriber.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for all four containers, as
//!     sequences (stacks top first).
//!   - Deserializing a bounded container requires `Self: Default` and fails
//!     when the input exceeds `N`.
//!
//! - `unsafe-maybe-uninit`
//!   - Switches the bounded buffer to `[MaybeUninit<T>; N]`.
//!   - Relaxes the `T: Default` requirement of `new()` / `Default`.
//!   - Allows a small amount of internal `unsafe` to avoid touching the
//!     uninitialized tail.
//!
//! ## Thread safety
//!
//! Containers are plain owned values with no interior mutability. Sharing one
//! across threads follows the usual `&`/`&mut` rules; no internal locking is
//! done.
//!
//! ## Example
//!
//! ```rust
//! use bounded_seq::{OrderedArray, Stack, StackLinkedList};
//!
//! let mut sorted: OrderedArray<u32, 4> = OrderedArray::new();
//! for v in [30, 10, 20] {
//!     sorted.insert(v).unwrap();
//! }
//! assert_eq!(sorted.as_slice(), &[10, 20, 30]);
//!
//! let mut stack = StackLinkedList::new();
//! for v in &sorted {
//!     stack.push(*v).unwrap();
//! }
//! assert_eq!(stack.pop(), Ok(30));
//! ```

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buffer;
mod error;
mod index;
mod iter;
mod ordered;
mod search;
#[cfg(feature = "serde")]
mod serde;
mod sort;
mod stack;
mod unordered;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use ordered::OrderedArray;
pub use search::{
    binary_search_iterative, binary_search_iterative_range, binary_search_recursive,
    binary_search_recursive_range,
};
pub use sort::{
    bubble_sort_iterative, bubble_sort_recursive, insertion_sort_iterative,
    insertion_sort_recursive, selection_sort_iterative, selection_sort_recursive,
};
pub use stack::{ListIntoIter, ListIter, Stack, StackArray, StackLinkedList};
pub use unordered::UnorderedArray;

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        binary_search_iterative_range, binary_search_recursive_range, Error, OrderedArray, Stack,
        StackArray, StackLinkedList, UnorderedArray,
    };
    use alloc::vec::Vec;

    #[test]
    fn scenario_ordered_insert_reads_sorted() {
        let mut a: OrderedArray<i32, 11> = OrderedArray::new();
        for v in [51, 5, 8, 46, 40, 2, 55, 20, 28, 36, 32] {
            a.insert(v).unwrap();
        }
        let read: Vec<i32> = (0..11).map(|i| a[i]).collect();
        assert_eq!(read, [2, 5, 8, 20, 28, 32, 36, 40, 46, 51, 55]);
    }

    #[test]
    fn scenario_ordered_binary_search_after_deletes() {
        let mut a: OrderedArray<i32, 11> = OrderedArray::new();
        for v in [51, 5, 8, 46, 40, 2, 55, 20, 28, 36, 32] {
            a.insert(v).unwrap();
        }
        assert!(a.delete(&2));
        assert!(a.delete(&32));
        assert!(!a.binary_search(&2));
        assert!(!a.binary_search(&32));
        assert!(a.binary_search(&55));
        assert!(a.binary_search(&28));
    }

    #[test]
    fn scenario_unordered_delete_keeps_order() {
        let mut a: UnorderedArray<i32, 6> = UnorderedArray::new();
        for v in [7, 9, 3, 11, 8, 4] {
            a.insert(v).unwrap();
        }
        for v in [7, 3, 4] {
            assert!(a.delete(&v));
        }
        assert_eq!(a.as_slice(), &[9, 11, 8]);
    }

    #[test]
    fn scenario_stack_array_capacity() {
        let mut s: StackArray<i32, 5> = StackArray::new();
        for v in [10, 20, 30, 40, 50] {
            s.push(v).unwrap();
        }
        assert_eq!(s.push(60), Err(Error::Full));
        let popped: Vec<i32> = (0..4).map(|_| s.pop().unwrap()).collect();
        assert_eq!(popped, [50, 40, 30, 20]);
    }

    #[test]
    fn scenario_linked_stack() {
        let mut s = StackLinkedList::new();
        for v in [10, 20, 30] {
            s.push(v).unwrap();
        }
        assert_eq!(s.len(), 3);
        assert_eq!(s.pop(), Ok(30));
        assert_eq!(s.peek(), Ok(&20));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn scenario_binary_search_restricted_range() {
        let values = [2, 5, 8, 20, 28, 32, 36, 40, 46, 51, 55];
        assert!(!binary_search_iterative_range(&values, 3, 7, &55));
        assert!(binary_search_iterative_range(&values, 3, 7, &32));
        assert!(!binary_search_recursive_range(&values, 3, 7, &55));
        assert!(binary_search_recursive_range(&values, 3, 7, &32));
    }
}
