use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod adaptive;
mod merge;
mod reorder;
mod shuffle;
mod sort;

pub use shuffle::SHUFFLE_SEED;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

/// The merge sort used by [`List::sort_with`] and [`List::sort_by_with`].
///
/// Both strategies are stable, relink the nodes in place and allocate
/// nothing. [`SortStrategy::default`] is `TopDown`, or `Adaptive` when the
/// `adaptive-sort` feature is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortStrategy {
    /// Recursive merge sort: split at the middle with a fast/slow walk, sort
    /// both halves, merge them. Uses *O*(log(*n*)) stack.
    TopDown,
    /// Iterative bottom-up merge sort with a stack of pending power-of-two
    /// runs, in the manner of the Linux kernel's `list_sort`. Merges are kept
    /// at most 2:1 unbalanced and the stack lives in a fixed array.
    ///
    /// While draining the tail of its last merge, it calls the comparator
    /// with the same element on both sides once every 256 nodes, and ignores
    /// the result. Comparators must tolerate such calls.
    Adaptive,
}

impl Default for SortStrategy {
    fn default() -> Self {
        if cfg!(feature = "adaptive-sort") {
            SortStrategy::Adaptive
        } else {
            SortStrategy::TopDown
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list in ascending order with the default [`SortStrategy`].
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and never
    /// allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by_with(SortStrategy::default(), T::cmp);
    }

    /// Sort the list with a comparator function and the default
    /// [`SortStrategy`].
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified, but every element is kept.
    ///
    /// For example, while [`f64`] doesn’t implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function
    /// when we know the list doesn’t contain a `NaN`.
    /// ```
    /// use cyclic_queue::List;
    /// let mut floats = List::from_iter([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(Vec::from_iter(floats), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(v.iter().copied()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_by_with(SortStrategy::default(), compare);
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements)
    /// and *O*(*m* \* *n* \* log(*n*)) worst-case, where the
    /// key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut v = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(v), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.sort_by_with(SortStrategy::default(), |a, b| f(a).cmp(&f(b)));
    }

    /// Sort the list in ascending order with the given strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{List, SortStrategy};
    /// let mut list = List::from_iter(["c", "a", "b"]);
    ///
    /// list.sort_with(SortStrategy::Adaptive);
    ///
    /// assert_eq!(Vec::from_iter(list), vec!["a", "b", "c"]);
    /// ```
    pub fn sort_with(&mut self, strategy: SortStrategy)
    where
        T: Ord,
    {
        self.sort_by_with(strategy, T::cmp);
    }

    /// Sort the list with a comparator function and the given strategy.
    ///
    /// If `compare` panics, the elements are leaked and the list is left
    /// empty.
    pub fn sort_by_with<F>(&mut self, strategy: SortStrategy, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match strategy {
            SortStrategy::TopDown => sort::merge_sort(self, &mut compare),
            SortStrategy::Adaptive => adaptive::list_sort(self, &mut compare),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{List, SortStrategy};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::cmp::Ordering;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    const STRATEGIES: [SortStrategy; 2] = [SortStrategy::TopDown, SortStrategy::Adaptive];

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_traits() {
        let list = List::from_iter([1, 2, 3]);
        let cloned = list.clone();
        cloned.assert_well_formed();
        assert_eq!(list, cloned);
        assert_eq!(hash_of(&list), hash_of(&cloned));
        assert!(list < List::from_iter([1, 2, 4]));
        assert!(list > List::from_iter([1, 2]));
        assert_eq!(list.cmp(&cloned), Ordering::Equal);
        assert!(list.contains(&2));
        assert!(!list.contains(&4));
    }

    #[test]
    fn sort_strategy_default() {
        let expected = if cfg!(feature = "adaptive-sort") {
            SortStrategy::Adaptive
        } else {
            SortStrategy::TopDown
        };
        assert_eq!(SortStrategy::default(), expected);
    }

    #[test]
    fn sort_small() {
        for strategy in STRATEGIES {
            let mut empty = List::<i32>::new();
            empty.sort_with(strategy);
            assert!(empty.is_empty());
            empty.assert_well_formed();

            let mut single = List::from_iter([7]);
            single.sort_with(strategy);
            assert_eq!(Vec::from_iter(single), vec![7]);

            let mut list = List::from_iter(["c", "a", "b"]);
            list.sort_with(strategy);
            list.assert_well_formed();
            assert_eq!(Vec::from_iter(list), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn sort_shuffled() {
        let mut rng = StdRng::seed_from_u64(7);
        for strategy in STRATEGIES {
            for len in [2, 3, 17, 255, 256, 257, 1000] {
                let mut values = Vec::from_iter(0..len);
                values.shuffle(&mut rng);
                let mut list = List::from_iter(values);
                list.sort_with(strategy);
                list.assert_well_formed();
                assert!(list.iter().copied().eq(0..len));
            }
        }
    }

    #[test]
    fn sort_checkpoint_calls() {
        for (strategy, expected) in [(SortStrategy::Adaptive, 2), (SortStrategy::TopDown, 0)] {
            let mut list = List::from_iter(0..1024);
            let mut self_calls = 0;
            list.sort_by_with(strategy, |a, b| {
                if std::ptr::eq(a, b) {
                    self_calls += 1;
                }
                a.cmp(b)
            });
            assert_eq!(self_calls, expected);
            assert!(list.iter().copied().eq(0..1024));
        }
    }

    fn count_comparisons(strategy: SortStrategy, values: Vec<usize>) -> usize {
        let n = values.len();
        let mut list = List::from_iter(values);
        let mut comparisons = 0;
        list.sort_by_with(strategy, |a, b| {
            if !std::ptr::eq(a, b) {
                comparisons += 1;
            }
            a.cmp(b)
        });
        assert!(list.iter().copied().eq(0..n));
        comparisons
    }

    #[test]
    fn sort_comparison_bound() {
        let mut rng = StdRng::seed_from_u64(2021);
        for n in [1000, 4096, 5000] {
            let log2 = (n as f64).log2();
            let adaptive_bound = n as f64 * log2 - 0.9 * n as f64;
            let top_down_bound = n * log2.ceil() as usize;
            for _ in 0..5 {
                let mut values = Vec::from_iter(0..n);
                values.shuffle(&mut rng);
                let comparisons = count_comparisons(SortStrategy::Adaptive, values.clone());
                assert!(
                    comparisons as f64 <= adaptive_bound,
                    "adaptive sort of {} took {} comparisons",
                    n,
                    comparisons
                );
                let comparisons = count_comparisons(SortStrategy::TopDown, values);
                assert!(
                    comparisons <= top_down_bound,
                    "top-down sort of {} took {} comparisons",
                    n,
                    comparisons
                );
            }
        }
    }

    #[test]
    fn sort_panic_leaves_list_empty() {
        for strategy in STRATEGIES {
            let mut list = List::from_iter([3, 1, 2, 5, 4]);
            let mut calls = 0;
            let result = catch_unwind(AssertUnwindSafe(|| {
                list.sort_by_with(strategy, |a, b| {
                    calls += 1;
                    if calls == 3 {
                        panic!("comparator failure");
                    }
                    a.cmp(b)
                })
            }));
            assert!(result.is_err());
            assert!(list.is_empty());
            list.assert_well_formed();
            list.push_back(1);
            assert_eq!(list.len(), 1);
        }
    }

    #[test]
    fn sort_by_key_and_reverse() {
        let mut list = List::from_iter([-5i32, 4, 1, -3, 2]);
        list.sort_by_key(|k| k.abs());
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, -3, 4, -5]);
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(Vec::from_iter(list), vec![4, 2, 1, -3, -5]);
    }

    proptest! {
        #[test]
        fn sort_is_sorted_permutation(values in prop::collection::vec(any::<i16>(), 0..300)) {
            let mut expected = values.clone();
            expected.sort();
            for strategy in STRATEGIES {
                let mut list = List::from_iter(values.iter().copied());
                list.sort_with(strategy);
                list.assert_well_formed();
                prop_assert_eq!(Vec::from_iter(list), expected.clone());
            }
        }

        #[test]
        fn sort_is_stable(keys in prop::collection::vec(0u8..8, 0..300)) {
            let pairs = Vec::from_iter(keys.iter().copied().enumerate().map(|(i, k)| (k, i)));
            let mut expected = pairs.clone();
            expected.sort_by_key(|&(k, _)| k);
            for strategy in STRATEGIES {
                let mut list = List::from_iter(pairs.iter().copied());
                list.sort_by_with(strategy, |a, b| a.0.cmp(&b.0));
                prop_assert_eq!(Vec::from_iter(list), expected.clone());
            }
        }
    }
}
