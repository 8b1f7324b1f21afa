// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Elementary comparison sorts over a mutable slice.
//!
//! Each algorithm comes in an iterative and a recursive form. All of them sort
//! in place, ascending under `Ord`, using only adjacent or pairwise swaps, and
//! treat empty and single-element slices as already sorted.
//!
//! These routines are standalone utilities: the ordered containers in this
//! crate keep their own order incrementally and never call them.
//!
//! ```rust
//! use bounded_seq::insertion_sort_iterative;
//!
//! let mut items = [8, 20, 5, 15, 3, 17];
//! insertion_sort_iterative(&mut items);
//! assert_eq!(items, [3, 5, 8, 15, 17, 20]);
//! ```

mod bubble;
mod insertion;
mod selection;

pub use bubble::{bubble_sort_iterative, bubble_sort_recursive};
pub use insertion::{insertion_sort_iterative, insertion_sort_recursive};
pub use selection::{selection_sort_iterative, selection_sort_recursive};

#[cfg(test)]
mod tests {
    // Imports
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    type SortFn = fn(&mut [i32]);

    const ALL: [(&str, SortFn); 6] = [
        ("bubble_iterative", bubble_sort_iterative),
        ("bubble_recursive", bubble_sort_recursive),
        ("selection_iterative", selection_sort_iterative),
        ("selection_recursive", selection_sort_recursive),
        ("insertion_iterative", insertion_sort_iterative),
        ("insertion_recursive", insertion_sort_recursive),
    ];

    #[test]
    fn test_empty_slice_is_noop() {
        for (name, sort) in ALL {
            let mut items: [i32; 0] = [];
            sort(&mut items);
            assert!(items.is_empty(), "{name}");
        }
    }

    #[test]
    fn test_small_inputs_sorted() {
        for (name, sort) in ALL {
            let mut one = [50];
            sort(&mut one);
            assert_eq!(one, [50], "{name}");

            let mut two = [20, 15];
            sort(&mut two);
            assert_eq!(two, [15, 20], "{name}");

            let mut mixed = [8, 20, 5, 15, 3, 17];
            sort(&mut mixed);
            assert_eq!(mixed, [3, 5, 8, 15, 17, 20], "{name}");

            let mut bubbled = [8, 5, 15, 20, 17, 3];
            sort(&mut bubbled);
            assert_eq!(bubbled, [3, 5, 8, 15, 17, 20], "{name}");

            let mut reversed = [20, 17, 15, 8, 5, 3];
            sort(&mut reversed);
            assert_eq!(reversed, [3, 5, 8, 15, 17, 20], "{name}");
        }
    }

    #[test]
    fn test_duplicates_are_kept() {
        for (name, sort) in ALL {
            let mut items = [4, 1, 4, 0, 1, 4];
            sort(&mut items);
            assert_eq!(items, [0, 1, 1, 4, 4, 4], "{name}");
        }
    }

    proptest! {
        #[test]
        fn prop_every_sort_matches_std(items in prop::collection::vec(-100i32..100, 0..48)) {
            let mut expected = items.clone();
            expected.sort();
            for (name, sort) in ALL {
                let mut actual: Vec<i32> = items.clone();
                sort(&mut actual);
                prop_assert_eq!(&actual, &expected, "{}", name);
            }
        }
    }
}
