// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets enumeration.

/// Returns the binomial coefficient for n choose k.
pub const fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let mut res = 1;
    let mut i = 0;
    while i < k {
        // Exact at each step as res * (n - i) / (i + 1) == nck(n, i + 1).
        res = res * (n - i) / (i + 1);
        i += 1;
    }

    res
}

/// An iterator over the K-subsets of the indices `0..n`.
///
/// Subsets are generated in colexicographic order using Algorithm L from
/// TAOCP 4a, each subset is an array of increasing indices. The iterator is
/// lazy, it only stores the current subset.
///
/// ```
/// # use besthand_cards::KSubsets;
/// let subsets = KSubsets::<2>::new(3).collect::<Vec<_>>();
/// assert_eq!(subsets, vec![[0, 1], [0, 2], [1, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct KSubsets<const K: usize> {
    c: [usize; K],
    n: usize,
    done: bool,
}

impl<const K: usize> KSubsets<K> {
    /// Creates an iterator over the K-subsets of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            c: std::array::from_fn(|i| i),
            n,
            done: K > n,
        }
    }

    /// The upper bound for the jth index.
    #[inline]
    fn bound(&self, j: usize) -> usize {
        if j + 1 < K { self.c[j + 1] } else { self.n }
    }
}

impl<const K: usize> Iterator for KSubsets<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let subset = self.c;

        let mut j = 0;
        while j < K && self.c[j] + 1 == self.bound(j) {
            self.c[j] = j;
            j += 1;
        }

        if j == K {
            self.done = true;
        } else {
            self.c[j] += 1;
        }

        Some(subset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(52, k), v));

        [1, 7, 21, 35, 35, 21, 7, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(7, k), v));
    }

    #[test]
    fn five_of_seven() {
        let subsets = KSubsets::<5>::new(7).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 21);
        assert_eq!(subsets[0], [0, 1, 2, 3, 4]);
        assert_eq!(subsets[20], [2, 3, 4, 5, 6]);

        let unique = subsets.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 21);

        for s in &subsets {
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            assert!(s[4] < 7);
        }
    }

    #[test]
    fn subsets_counts() {
        assert_eq!(KSubsets::<5>::new(5).count(), 1);
        assert_eq!(KSubsets::<5>::new(6).count(), 6);
        assert_eq!(KSubsets::<5>::new(4).count(), 0);
        assert_eq!(KSubsets::<3>::new(52).count(), nck(52, 3));
        assert_eq!(KSubsets::<0>::new(3).count(), 1);
    }

    #[test]
    fn restartable() {
        let it = KSubsets::<5>::new(7);
        let first = it.clone().collect::<Vec<_>>();
        let second = it.collect::<Vec<_>>();
        assert_eq!(first, second);
    }
}
