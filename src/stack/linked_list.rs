// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `StackLinkedList`: an unbounded stack over singly linked heap nodes.
//!
//! Ownership runs strictly downwards: the stack owns the top node and every
//! node owns the node below it. Nothing is shared, and popped nodes are
//! dropped immediately (no node pooling).

// Crate imports
use crate::{error::Error, stack::Stack};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{fmt, iter::FusedIterator};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// An unbounded LIFO stack built from singly linked nodes.
///
/// `push` and `pop` are `O(1)` and allocate/free exactly one node.
/// `len` is **`O(n)`**: no counter is kept, so it walks the chain from the
/// top to the end every time it is called.
///
/// `push` never fails.
///
/// # Examples
///
/// ```rust
/// use bounded_seq::{Stack, StackLinkedList};
///
/// let mut s = StackLinkedList::new();
/// for v in [10, 20, 30] {
///     s.push(v).unwrap();
/// }
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.pop(), Ok(30));
/// assert_eq!(s.peek(), Ok(&20));
/// assert_eq!(s.len(), 2);
/// ```
pub struct StackLinkedList<T> {
    top: Link<T>,
}

impl<T> StackLinkedList<T> {
    /// Constructs an empty stack. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { top: None }
    }

    /// Iterates from the top of the stack to the bottom.
    #[inline]
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            next: self.top.as_deref(),
        }
    }

    /// Drops every node; the stack can be reused afterwards.
    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Stack<T> for StackLinkedList<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Counts the nodes by walking the whole chain: `O(n)`.
    fn len(&self) -> usize {
        let mut len = 0;
        let mut node = self.top.as_deref();
        while let Some(n) = node {
            node = n.next.as_deref();
            len += 1;
        }
        len
    }

    fn push(&mut self, value: T) -> Result<(), Error> {
        let node = Box::new(Node {
            value,
            next: self.top.take(),
        });
        self.top = Some(node);
        Ok(())
    }

    fn pop(&mut self) -> Result<T, Error> {
        match self.top.take() {
            Some(node) => {
                let Node { value, next } = *node;
                self.top = next;
                Ok(value)
            }
            None => {
                tracing::debug!(container = "StackLinkedList", "pop rejected: stack is empty");
                Err(Error::Empty)
            }
        }
    }

    fn peek(&self) -> Result<&T, Error> {
        self.top.as_deref().map(|node| &node.value).ok_or_else(|| {
            tracing::debug!(container = "StackLinkedList", "peek rejected: stack is empty");
            Error::Empty
        })
    }
}

// Unlinks node by node so a long chain is not dropped recursively.
impl<T> Drop for StackLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for StackLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for StackLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for StackLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for StackLinkedList<T> {}

/// Borrowing iterator returned by [`StackLinkedList::iter`], top to bottom.
pub struct ListIter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}
impl<T> FusedIterator for ListIter<'_, T> {}

/// Owned iterator that pops until the stack is empty.
pub struct ListIntoIter<T> {
    stack: StackLinkedList<T>,
}

impl<T> Iterator for ListIntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.stack.top.take().map(|node| {
            let Node { value, next } = *node;
            self.stack.top = next;
            value
        })
    }
}
impl<T> FusedIterator for ListIntoIter<T> {}

impl<T> IntoIterator for StackLinkedList<T> {
    type Item = T;
    type IntoIter = ListIntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIter { stack: self }
    }
}
impl<'a, T> IntoIterator for &'a StackLinkedList<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StackLinkedList;
    use crate::{Error, Stack};
    use alloc::{
        string::{String, ToString},
        vec::Vec,
    };

    #[test]
    fn test_push_pop_peek_scenario() {
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
    fn test_empty_access_is_error() {
        let mut s: StackLinkedList<i32> = StackLinkedList::new();
        assert!(s.is_empty());
        assert_eq!(s.pop(), Err(Error::Empty));
        assert_eq!(s.peek(), Err(Error::Empty));
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_len_walks_whole_chain() {
        // No cached count: len is recomputed from the nodes on every call,
        // so it stays correct across any interleaving of push and pop.
        let mut s = StackLinkedList::new();
        for v in 0..100 {
            s.push(v).unwrap();
            assert_eq!(s.len(), s.iter().count());
        }
        for expected in (0..100).rev() {
            assert_eq!(s.len(), expected + 1);
            s.pop().unwrap();
        }
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_non_copy_elements_move_through() {
        let mut s = StackLinkedList::new();
        s.push("a".to_string()).unwrap();
        s.push("b".to_string()).unwrap();
        assert_eq!(s.peek().map(String::as_str), Ok("b"));
        assert_eq!(s.pop(), Ok("b".to_string()));
        assert_eq!(s.pop(), Ok("a".to_string()));
    }

    #[test]
    fn test_iter_and_into_iter_top_first() {
        let mut s = StackLinkedList::new();
        for v in [1, 2, 3] {
            s.push(v).unwrap();
        }
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
        assert_eq!(s.into_iter().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn test_clear_and_reuse() {
        let mut s = StackLinkedList::new();
        s.push(1).unwrap();
        s.push(2).unwrap();
        s.clear();
        assert!(s.is_empty());
        s.push(3).unwrap();
        assert_eq!(s.peek(), Ok(&3));
    }

    #[test]
    fn test_long_chain_drops_without_recursion() {
        let mut s = StackLinkedList::new();
        for v in 0..200_000u32 {
            s.push(v).unwrap();
        }
        drop(s);
    }

    #[test]
    fn test_debug_and_eq() {
        let mut a = StackLinkedList::new();
        let mut b = StackLinkedList::new();
        for v in [1, 2] {
            a.push(v).unwrap();
            b.push(v).unwrap();
        }
        assert_eq!(a, b);
        assert_eq!(alloc::format!("{a:?}"), "[2, 1]");
        b.pop().unwrap();
        assert_ne!(a, b);
    }
}
