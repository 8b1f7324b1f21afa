// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Index of the first minimum of `items`. `items` must be non-empty.
fn min_index<T: Ord>(items: &[T]) -> usize {
    let mut min = 0;
    for (i, item) in items.iter().enumerate().skip(1) {
        if *item < items[min] {
            min = i;
        }
    }
    min
}

/// Selection sort, iterative.
pub fn selection_sort_iterative<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let min = i + min_index(&items[i..]);
        if min != i {
            items.swap(i, min);
        }
    }
}

/// Selection sort, recursive: place the minimum at the front, then recurse
/// on the tail.
pub fn selection_sort_recursive<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let min = min_index(items);
    if min != 0 {
        items.swap(0, min);
    }
    selection_sort_recursive(&mut items[1..]);
}
