use crate::list::{move_node, move_node_after, List};
use std::cmp::Ordering;

impl<T> List<T> {
    /// Swap every two adjacent elements: the 1st with the 2nd, the 3rd with
    /// the 4th, and so on. A trailing odd element stays in place.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(1..=5);
    /// list.swap_pairs();
    /// assert_eq!(Vec::from_iter(list), vec![2, 1, 4, 3, 5]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        // SAFETY: `current` and its successor are checked to be non-ghost
        // nodes of this list before being moved.
        unsafe {
            while current != ghost && current.as_ref().next != ghost {
                move_node(current.as_ref().next, current);
                current = current.as_ref().next;
            }
        }
    }

    /// Reverse the order of the elements in place.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(1..=4);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        let front = self.front_node();
        // SAFETY: the old front node stays in the list and its successor is
        // a non-ghost node when moved.
        unsafe {
            while front.as_ref().next != ghost {
                move_node_after(front.as_ref().next, ghost);
            }
        }
    }

    /// Reverse each consecutive block of `k` elements in place. A trailing
    /// block shorter than `k` is left as is, so `k == 1` changes nothing.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(1..=7);
    /// list.reverse_chunks(3);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1, 6, 5, 4, 7]);
    /// ```
    pub fn reverse_chunks(&mut self, k: usize) {
        assert!(k > 0, "chunk size must be positive");
        let mut anchor = self.ghost_node();
        for _ in 0..self.len() / k {
            // SAFETY: the block after `anchor` holds at least `k` nodes, so
            // the successor of its first node is in the block while moved.
            unsafe {
                let first = anchor.as_ref().next;
                for _ in 1..k {
                    move_node_after(first.as_ref().next, anchor);
                }
                anchor = first;
            }
        }
    }

    /// Remove the middle element and return it, or `None` if the list is
    /// empty. The middle of a list of length *n* is at index ⌊*n* / 2⌋, so
    /// the later of the two middles is removed when *n* is even.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(0..6);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(list.remove_middle(), Some(2));
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 4, 5]);
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let at = self.len() / 2;
        self.cursor_mut(at).remove()
    }

    /// Remove every element equal to one of its neighbors, so each run of
    /// equal elements disappears as a whole. Return the number of removed
    /// elements.
    ///
    /// On a sorted list, this keeps exactly the values that occur once.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 1, 2, 3, 3, 3, 4, 1]);
    /// assert_eq!(list.remove_duplicate_runs(), 5);
    /// assert_eq!(Vec::from_iter(list), vec![2, 4, 1]);
    /// ```
    pub fn remove_duplicate_runs(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.remove_duplicate_runs_by(|a, b| a == b)
    }

    /// Like [`List::remove_duplicate_runs`], with an equality predicate.
    pub fn remove_duplicate_runs_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        let mut in_run = false;
        let mut removed = 0;
        while current != ghost {
            // SAFETY: `current` is a non-ghost node of this list; its successor
            // is read before it is detached.
            unsafe {
                let next = current.as_ref().next;
                let duplicated =
                    next != ghost && same(&current.as_ref().element, &next.as_ref().element);
                if duplicated || in_run {
                    drop(self.detach_node(current));
                    removed += 1;
                }
                in_run = duplicated;
                current = next;
            }
        }
        removed
    }

    /// Keep only the elements that no later element is greater than, and
    /// return the new length. The remaining elements are in non-increasing
    /// order.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([5, 3, 8, 2]);
    /// assert_eq!(list.retain_suffix_maxima(), 2);
    /// assert_eq!(Vec::from_iter(list), vec![8, 2]);
    /// ```
    pub fn retain_suffix_maxima(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_suffix_maxima_by(T::cmp)
    }

    /// Like [`List::retain_suffix_maxima`], with a comparator function.
    pub fn retain_suffix_maxima_by<F>(&mut self, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let ghost = self.ghost_node();
        let mut max = self.back_node();
        if max == ghost {
            return 0;
        }
        // SAFETY: `max` is always a non-ghost node, and `current` is read
        // before it is detached.
        unsafe {
            let mut current = max.as_ref().prev;
            while current != ghost {
                let prev = current.as_ref().prev;
                if compare(&max.as_ref().element, &current.as_ref().element) == Ordering::Greater {
                    drop(self.detach_node(current));
                } else {
                    max = current;
                }
                current = prev;
            }
        }
        self.len()
    }
}
