// This file is part of bounded-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Walks `items[index]` left by adjacent swaps until its left neighbour is
/// not greater.
fn sink_left<T: Ord>(items: &mut [T], index: usize) {
    let mut j = index;
    while j >= 1 && items[j] < items[j - 1] {
        items.swap(j, j - 1);
        j -= 1;
    }
}

/// Insertion sort, iterative.
pub fn insertion_sort_iterative<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        sink_left(items, i);
    }
}

/// Insertion sort, recursive over the index of the next element to place.
pub fn insertion_sort_recursive<T: Ord>(items: &mut [T]) {
    insert_from(items, 1);
}

fn insert_from<T: Ord>(items: &mut [T], index: usize) {
    if index < items.len() {
        sink_left(items, index);
        insert_from(items, index + 1);
    }
}
