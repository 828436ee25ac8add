use crate::list::{connect, DetachedNodes, List, Node};
use std::cmp::Ordering;
use std::ptr::NonNull;

/// A sorted, non-cyclic range of nodes `front..=back`.
///
/// Following `next` from `front` reaches `back`, and `back.next` is the end
/// marker shared by every run of one sort (the ghost node of the list). The
/// `prev` links inside a run are valid, `front.prev` is not.
pub(super) struct Run<T> {
    pub(super) front: NonNull<Node<T>>,
    pub(super) back: NonNull<Node<T>>,
}

impl<T> Clone for Run<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Run<T> {}

/// Returns `true` if `a` may be placed before `b`, i.e. `a <= b`.
#[inline]
pub(super) unsafe fn precedes<T, F>(
    a: NonNull<Node<T>>,
    b: NonNull<Node<T>>,
    compare: &mut F,
) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    compare(&a.as_ref().element, &b.as_ref().element) != Ordering::Greater
}

/// Merge two sorted runs into one. On ties the node of `a` goes first.
///
/// Once a run is exhausted, the remainder of the other one is spliced on
/// as a whole.
pub(super) unsafe fn merge_runs<T, F>(
    a: Run<T>,
    b: Run<T>,
    end: NonNull<Node<T>>,
    compare: &mut F,
) -> Run<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert_eq!(a.back.as_ref().next, end);
    debug_assert_eq!(b.back.as_ref().next, end);
    let (mut x, mut y) = (a.front, b.front);
    let front = if precedes(x, y, compare) {
        let next = x.as_ref().next;
        std::mem::replace(&mut x, next)
    } else {
        let next = y.as_ref().next;
        std::mem::replace(&mut y, next)
    };
    let mut tail = front;
    loop {
        if x == end {
            connect(tail, y);
            return Run { front, back: b.back };
        }
        if y == end {
            connect(tail, x);
            return Run { front, back: a.back };
        }
        if precedes(x, y, compare) {
            connect(tail, x);
            tail = x;
            x = x.as_ref().next;
        } else {
            connect(tail, y);
            tail = y;
            y = y.as_ref().next;
        }
    }
}

impl<T> List<T> {
    /// Merge the sorted list `other` into the sorted list `self`, in
    /// ascending order. Equal elements of `self` stay in front of those of
    /// `other`.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`.
    /// After this operation, `other` becomes empty.
    ///
    /// This operation should compute in *O*(*n* + *m*) time and never
    /// allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 4, 6]);
    /// let mut other = List::from_iter([2, 3, 7]);
    ///
    /// list.merge(&mut other);
    ///
    /// assert!(other.is_empty());
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 6, 7]);
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, T::cmp);
    }

    /// Like [`List::merge`], with a comparator function. Both lists must be
    /// sorted by `compare`.
    pub fn merge_by<F>(&mut self, other: &mut Self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let theirs = match other.detach_all_nodes() {
            Some(theirs) => theirs,
            None => return,
        };
        let ghost = self.ghost_node();
        let ours = match self.detach_all_nodes() {
            Some(ours) => ours,
            None => {
                // SAFETY: the ghost node of an empty list is adjacent to itself.
                unsafe { self.attach_nodes(ghost, ghost, theirs) };
                return;
            }
        };
        #[cfg(feature = "length")]
        let len = ours.len + theirs.len;
        // SAFETY: both ranges were just detached, so nothing else links to
        // them. Terminating them at `ghost` makes two runs for `merge_runs`;
        // `ghost` itself is only compared against, until it is attached.
        unsafe {
            let (mut ours_back, mut theirs_back) = (ours.back, theirs.back);
            ours_back.as_mut().next = ghost;
            theirs_back.as_mut().next = ghost;
            let run = merge_runs(
                Run {
                    front: ours.front,
                    back: ours.back,
                },
                Run {
                    front: theirs.front,
                    back: theirs.back,
                },
                ghost,
                &mut compare,
            );
            self.attach_nodes(
                ghost,
                ghost,
                DetachedNodes::new(
                    run.front,
                    run.back,
                    #[cfg(feature = "length")]
                    len,
                ),
            );
        }
    }
}

impl<T> List<List<T>> {
    /// Merge every sorted list of the chain into the first one, in ascending
    /// order, and return its length. The other lists end up empty, and the
    /// chain itself is left as is.
    ///
    /// The lists are merged pairwise, round by round, so this operation
    /// should compute in *O*(*N* * log(*k*)) time for *k* lists of *N*
    /// elements in total.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut chain = List::from_iter([
    ///     List::from_iter([1, 4, 7]),
    ///     List::from_iter([2, 5]),
    ///     List::from_iter([3, 6, 9]),
    /// ]);
    ///
    /// assert_eq!(chain.merge_all(), 8);
    /// assert_eq!(Vec::from_iter(chain.pop_front().unwrap()), vec![1, 2, 3, 4, 5, 6, 7, 9]);
    /// assert!(chain.iter().all(List::is_empty));
    /// ```
    pub fn merge_all(&mut self) -> usize
    where
        T: Ord,
    {
        self.merge_all_by(T::cmp)
    }

    /// Like [`List::merge_all`], with a comparator function. Every list of the
    /// chain must be sorted by `compare`.
    pub fn merge_all_by<F>(&mut self, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut k = self.len();
        while k > 1 {
            // `slot` collects the result of the pair starting at `cur`.
            let (mut slot, mut cur) = (self.front_node(), self.front_node());
            // SAFETY: `cur`, its successor and `slot` are among the first `k`
            // nodes of the chain. `slot` trails `cur`, so the three lists
            // borrowed at a time never overlap.
            unsafe {
                for _ in 0..k / 2 {
                    let next = cur.as_ref().next;
                    let first = &mut (*cur.as_ptr()).element;
                    first.merge_by(&mut (*next.as_ptr()).element, &mut compare);
                    if slot != cur {
                        (*slot.as_ptr()).element.append(first);
                    }
                    cur = next.as_ref().next;
                    slot = slot.as_ref().next;
                }
                if k % 2 == 1 && slot != cur {
                    (*slot.as_ptr()).element.append(&mut (*cur.as_ptr()).element);
                }
            }
            k = (k + 1) / 2;
        }
        self.front().map_or(0, |list| list.len())
    }
}
