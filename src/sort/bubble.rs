// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Bubble sort, iterative.
///
/// After pass `n` the `n` largest elements sit in their final slots, so
/// `len - 1` passes suffice.
pub fn bubble_sort_iterative<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for pass in 1..len {
        for i in 0..len - pass {
            if items[i] > items[i + 1] {
                items.swap(i, i + 1);
            }
        }
    }
}

/// Bubble sort, recursive: one pass over `items`, then recurse on everything
/// but the last slot.
pub fn bubble_sort_recursive<T: Ord>(items: &mut [T]) {
    let len = items.len();
    if len <= 1 {
        return;
    }
    for i in 0..len - 1 {
        if items[i] > items[i + 1] {
            items.swap(i, i + 1);
        }
    }
    bubble_sort_recursive(&mut items[..len - 1]);
}
