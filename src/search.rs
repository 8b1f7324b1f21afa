// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binary search over a sorted slice.
//!
//! Two equivalent forms are provided, an iterative loop and a tail-recursive
//! function, each with a ranged variant (`low..=high`, inclusive on both
//! ends) and a whole-slice convenience wrapper.
//!
//! The searched range must already be sorted ascending under `Ord`; this is
//! not verified. Ranges are inclusive and unsigned, so an empty range is
//! written with `low > high` (for example `1, 0`).
//!
//! ```rust
//! use bounded_seq::{binary_search_iterative_range, binary_search_recursive};
//!
//! let values = [2, 5, 8, 20, 28, 32, 36, 40, 46, 51, 55];
//! assert!(binary_search_recursive(&values, &32));
//! assert!(!binary_search_iterative_range(&values, 3, 7, &55));
//! ```

// Core imports
use core::cmp::Ordering;

/// Returns `true` if `value` occurs anywhere in the sorted slice `elements`.
///
/// Always `false` for an empty slice.
#[inline]
pub fn binary_search_iterative<T: Ord>(elements: &[T], value: &T) -> bool {
    match elements.len() {
        0 => false,
        len => binary_search_iterative_range(elements, 0, len - 1, value),
    }
}

/// Returns `true` if `value` occurs in the sorted range `elements[low..=high]`.
///
/// `O(log n)` time, `O(1)` space.
///
/// # Panics
///
/// Panics if the range is non-empty and `high >= elements.len()`.
pub fn binary_search_iterative_range<T: Ord>(
    elements: &[T],
    mut low: usize,
    mut high: usize,
    value: &T,
) -> bool {
    while low <= high {
        let mid = (low + high) / 2;
        match value.cmp(&elements[mid]) {
            Ordering::Equal => return true,
            // mid == 0 implies low == 0: nothing left below.
            Ordering::Less if mid == 0 => return false,
            Ordering::Less => high = mid - 1,
            Ordering::Greater => low = mid + 1,
        }
    }
    false
}

/// Recursive counterpart of [`binary_search_iterative`].
#[inline]
pub fn binary_search_recursive<T: Ord>(elements: &[T], value: &T) -> bool {
    match elements.len() {
        0 => false,
        len => binary_search_recursive_range(elements, 0, len - 1, value),
    }
}

/// Recursive counterpart of [`binary_search_iterative_range`].
///
/// Every recursive call is in tail position; depth is `O(log n)`.
///
/// # Panics
///
/// Panics if the range is non-empty and `high >= elements.len()`.
pub fn binary_search_recursive_range<T: Ord>(
    elements: &[T],
    low: usize,
    high: usize,
    value: &T,
) -> bool {
    if low > high {
        return false;
    }
    let mid = (low + high) / 2;
    match value.cmp(&elements[mid]) {
        Ordering::Equal => true,
        Ordering::Less if mid == 0 => false,
        Ordering::Less => binary_search_recursive_range(elements, low, mid - 1, value),
        Ordering::Greater => binary_search_recursive_range(elements, mid + 1, high, value),
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    const VALUES: [i32; 11] = [2, 5, 8, 20, 28, 32, 36, 40, 46, 51, 55];

    fn check_whole_slice(search: fn(&[i32], &i32) -> bool) {
        assert!(!search(&[], &200));
        assert!(search(&VALUES, &2));
        assert!(search(&VALUES, &55));
        assert!(search(&VALUES, &32));
        assert!(search(&VALUES, &20));
        assert!(!search(&VALUES, &3));
        assert!(!search(&VALUES, &31));
        assert!(!search(&VALUES, &54));
        assert!(!search(&VALUES, &1000));
        assert!(!search(&VALUES, &-10));
    }

    fn check_ranges(search: fn(&[i32], usize, usize, &i32) -> bool) {
        assert!(!search(&VALUES, 0, 4, &32));
        assert!(!search(&VALUES, 1, 4, &2));
        assert!(!search(&VALUES, 7, 9, &55));
        assert!(search(&VALUES, 3, 7, &20));
        assert!(search(&VALUES, 3, 7, &40));
        assert!(search(&VALUES, 3, 7, &32));
        assert!(search(&VALUES, 0, 10, &2));
        assert!(search(&VALUES, 0, 10, &55));
    }

    #[test]
    fn test_iterative_whole_slice() {
        check_whole_slice(binary_search_iterative);
    }

    #[test]
    fn test_recursive_whole_slice() {
        check_whole_slice(binary_search_recursive);
    }

    #[test]
    fn test_iterative_ranges() {
        check_ranges(binary_search_iterative_range);
    }

    #[test]
    fn test_recursive_ranges() {
        check_ranges(binary_search_recursive_range);
    }

    #[test]
    fn test_restricted_range_scenario() {
        // [3, 7] covers 20, 28, 32, 36, 40
        assert!(!binary_search_iterative_range(&VALUES, 3, 7, &55));
        assert!(binary_search_iterative_range(&VALUES, 3, 7, &32));
        assert!(!binary_search_recursive_range(&VALUES, 3, 7, &55));
        assert!(binary_search_recursive_range(&VALUES, 3, 7, &32));
    }

    #[test]
    fn test_empty_range_is_not_found() {
        assert!(!binary_search_iterative_range(&VALUES, 4, 3, &28));
        assert!(!binary_search_recursive_range(&VALUES, 4, 3, &28));
        let empty: [i32; 0] = [];
        assert!(!binary_search_iterative_range(&empty, 1, 0, &1));
        assert!(!binary_search_recursive_range(&empty, 1, 0, &1));
    }

    #[test]
    fn test_single_element_range_compares_directly() {
        assert!(binary_search_iterative_range(&VALUES, 0, 0, &2));
        assert!(!binary_search_iterative_range(&VALUES, 0, 0, &1));
        assert!(!binary_search_iterative_range(&VALUES, 0, 0, &3));
        assert!(binary_search_recursive_range(&VALUES, 10, 10, &55));
        assert!(!binary_search_recursive_range(&VALUES, 10, 10, &56));
    }

    #[test]
    fn test_value_below_first_element_terminates() {
        assert!(!binary_search_iterative(&[5], &1));
        assert!(!binary_search_recursive(&[5, 6], &i32::MIN));
    }

    #[test]
    #[should_panic]
    fn test_high_past_end_panics() {
        let _ = binary_search_iterative_range(&VALUES, 0, 11, &100);
    }

    fn sorted_vec() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(-50i32..50, 0..40).prop_map(|mut v| {
            v.sort();
            v
        })
    }

    proptest! {
        /// Found iff present, and both forms agree.
        #[test]
        fn prop_whole_slice_matches_contains(values in sorted_vec(), needle in -60i32..60) {
            let expected = values.contains(&needle);
            prop_assert_eq!(binary_search_iterative(&values, &needle), expected);
            prop_assert_eq!(binary_search_recursive(&values, &needle), expected);
        }

        #[test]
        fn prop_ranges_agree(
            values in sorted_vec(),
            needle in -60i32..60,
            a in 0usize..40,
            b in 0usize..40,
        ) {
            prop_assume!(!values.is_empty());
            let low = a % values.len();
            let high = b % values.len();
            let expected = low <= high && values[low..=high].contains(&needle);
            prop_assert_eq!(binary_search_iterative_range(&values, low, high, &needle), expected);
            prop_assert_eq!(binary_search_recursive_range(&values, low, high, &needle), expected);
        }
    }
}
