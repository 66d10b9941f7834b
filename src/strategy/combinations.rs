//! k-subset enumeration over a prop slate.
//!
//! Iterative index-advance algorithm: start at positions `[0, 1, .., k-1]`,
//! emit, then bump the rightmost position that is not yet at its maximum
//! (`i + n - k`) and reset everything to its right to consecutive values.
//! Subsets come out in lexicographic order of their position tuples and the
//! source slice is only borrowed.

use std::iter::FusedIterator;

/// Lazy iterator over every `k`-element subset of `items`.
///
/// Each item is a `Vec` of references in source order. `k > n` yields
/// nothing; `k == 0` yields a single empty subset.
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        if k > items.len() {
            return Self {
                items,
                indices: Vec::new(),
                done: true,
            };
        }
        Self {
            items,
            indices: (0..k).collect(),
            done: false,
        }
    }

    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();

        let pivot = (0..k).rev().find(|&i| self.indices[i] != i + n - k);
        match pivot {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let combo = self.indices.iter().map(|&i| &self.items[i]).collect();
        self.advance();
        Some(combo)
    }
}

impl<T> FusedIterator for Combinations<'_, T> {}

/// Collect every `k`-element subset of `items`.
pub fn combinations<T>(items: &[T], k: usize) -> Vec<Vec<&T>> {
    Combinations::new(items, k).collect()
}

/// Binomial coefficient `C(n, k)`, saturating at `usize::MAX`.
pub fn combination_count(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // exact at every step: result is C(n, i) before this line
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    result as usize
}

/// Number of subsets of size 2 through `max_legs` over `n` items.
pub fn total_combinations(n: usize, max_legs: usize) -> usize {
    (2..=max_legs.min(n)).fold(0usize, |acc, k| acc.saturating_add(combination_count(n, k)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
