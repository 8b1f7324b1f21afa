// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for every container in the crate.
//!
//! All containers serialize as a plain sequence:
//!
//! - [`UnorderedArray`] / [`OrderedArray`]: the occupied prefix, index 0 first.
//! - [`StackArray`] / [`StackLinkedList`]: top of the stack first (pop order).
//!
//! Deserialization goes through each container's own insertion operation, so
//! invariants hold regardless of the input:
//!
//! - `OrderedArray` inserts every element and comes out sorted even when the
//!   input is not;
//! - both stacks come back with the same element on top;
//! - bounded containers reject sequences longer than their capacity `N`.
//!
//! ### Trait bounds
//!
//! Bounded containers additionally require `Self: Default`, which in the
//! default (safe) backend means `T: Default`. With the `unsafe-maybe-uninit`
//! feature enabled, only `T: Copy` is needed.

// Crate imports
use crate::{
    error::Error,
    ordered::OrderedArray,
    stack::{Stack, StackArray, StackLinkedList},
    unordered::UnorderedArray,
};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

fn serialize_items<'a, S, T, I>(s: S, len: Option<usize>, items: I) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(len)?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Copy + Serialize, const N: usize> Serialize for UnorderedArray<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_items(s, Some(self.len()), self.iter())
    }
}

impl<T: Copy + Serialize, const N: usize> Serialize for OrderedArray<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_items(s, Some(self.len()), self.iter())
    }
}

impl<T: Copy + Serialize, const N: usize> Serialize for StackArray<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_items(s, Some(Stack::len(self)), self.iter())
    }
}

impl<T: Serialize> Serialize for StackLinkedList<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        // No cached length: this is one extra walk of the chain.
        serialize_items(s, Some(Stack::len(self)), self.iter())
    }
}

/// A container that can be rebuilt one element at a time.
trait SeqSink<T>: Sized {
    /// Capacity to report in error messages, `None` if unbounded.
    const CAPACITY: Option<usize>;

    fn empty() -> Self;

    fn accept(&mut self, value: T) -> Result<(), Error>;

    fn finish(self) -> Result<Self, Error> {
        Ok(self)
    }
}

impl<T: Copy, const N: usize> SeqSink<T> for UnorderedArray<T, N>
where
    Self: Default,
{
    const CAPACITY: Option<usize> = Some(N);

    fn empty() -> Self {
        Self::default()
    }

    fn accept(&mut self, value: T) -> Result<(), Error> {
        self.insert(value)
    }
}

impl<T: Copy + Ord, const N: usize> SeqSink<T> for OrderedArray<T, N>
where
    Self: Default,
{
    const CAPACITY: Option<usize> = Some(N);

    fn empty() -> Self {
        Self::default()
    }

    fn accept(&mut self, value: T) -> Result<(), Error> {
        self.insert(value)
    }
}

impl<T: Copy, const N: usize> SeqSink<T> for StackArray<T, N>
where
    Self: Default,
{
    const CAPACITY: Option<usize> = Some(N);

    fn empty() -> Self {
        Self::default()
    }

    fn accept(&mut self, value: T) -> Result<(), Error> {
        self.push(value)
    }

    // Elements arrive top first, so the first one pushed ended up at the
    // bottom; popping onto a second stack of the same capacity flips it.
    fn finish(mut self) -> Result<Self, Error> {
        let mut out = Self::default();
        while let Ok(value) = self.pop() {
            out.push(value)?;
        }
        Ok(out)
    }
}

impl<T> SeqSink<T> for StackLinkedList<T> {
    const CAPACITY: Option<usize> = None;

    fn empty() -> Self {
        Self::new()
    }

    fn accept(&mut self, value: T) -> Result<(), Error> {
        self.push(value)
    }

    // Pushing top first built the chain upside down; popping it onto a
    // fresh stack flips it back without an intermediate buffer.
    fn finish(mut self) -> Result<Self, Error> {
        let mut out = Self::new();
        while let Ok(value) = self.pop() {
            out.push(value)?;
        }
        Ok(out)
    }
}

struct SeqVisitor<C, T>(PhantomData<(C, T)>);

impl<'de, C, T> de::Visitor<'de> for SeqVisitor<C, T>
where
    C: SeqSink<T>,
    T: Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match C::CAPACITY {
            Some(n) => write!(f, "array or sequence with at most {} elements", n),
            None => f.write_str("array or sequence"),
        }
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = C::empty();
        while let Some(elem) = a.next_element::<T>()? {
            out.accept(elem).map_err(|_| {
                de::Error::custom(format_args!(
                    "too many elements (capacity {})",
                    C::CAPACITY.unwrap_or(usize::MAX)
                ))
            })?;
        }
        out.finish().map_err(de::Error::custom)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for UnorderedArray<T, N>
where
    T: Deserialize<'de> + Copy,
    Self: Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SeqVisitor::<Self, T>(PhantomData))
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for OrderedArray<T, N>
where
    T: Deserialize<'de> + Copy + Ord,
    Self: Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SeqVisitor::<Self, T>(PhantomData))
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for StackArray<T, N>
where
    T: Deserialize<'de> + Copy,
    Self: Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SeqVisitor::<Self, T>(PhantomData))
    }
}

impl<'de, T> Deserialize<'de> for StackLinkedList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SeqVisitor::<Self, T>(PhantomData))
    }
}
