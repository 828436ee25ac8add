//! Bottom-up merge sort, after the Linux kernel's `lib/list_sort.c`.
//!
//! The input is consumed one node at a time and pushed as a run of length 1
//! onto a stack of pending runs. Before each push, the number of nodes seen
//! so far (`count`) decides whether two runs are merged: walk one run down
//! the stack for every trailing set bit of `count`; if a set bit remains
//! above them, merge the run reached with the next older one. This keeps
//! every merge at most 2:1 unbalanced, and pending runs are powers of two
//! with at most two runs of each size.
//!
//! During the sort the nodes form `next`-only chains terminated by the ghost
//! node; `prev` links are rebuilt by the final merge.
use super::merge::{precedes, Run};
use crate::list::{connect, DetachedNodes, List, Node};
use std::cmp::Ordering;
use std::ptr::NonNull;

type Link<T> = NonNull<Node<T>>;

/// Enough for the pending runs of a list with `usize::MAX` nodes.
const PENDING_CAPACITY: usize = 2 * usize::BITS as usize;

/// The stack of pending runs, oldest (and largest) first.
struct Pending<T> {
    runs: [Link<T>; PENDING_CAPACITY],
    len: usize,
}

impl<T> Pending<T> {
    fn new(end: Link<T>) -> Self {
        Self {
            runs: [end; PENDING_CAPACITY],
            len: 0,
        }
    }

    fn push(&mut self, run: Link<T>) {
        debug_assert!(self.len < PENDING_CAPACITY, "too many pending runs");
        self.runs[self.len] = run;
        self.len += 1;
    }

    fn pop(&mut self) -> Link<T> {
        self.len -= 1;
        self.runs[self.len]
    }

    /// Merge the run `depth` places below the top with the next older one.
    unsafe fn merge_at<F>(&mut self, depth: usize, end: Link<T>, compare: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let newer = self.len - 1 - depth;
        let older = newer - 1;
        self.runs[older] = merge(self.runs[older], self.runs[newer], end, compare);
        self.runs.copy_within(newer + 1..self.len, newer);
        self.len -= 1;
    }
}

pub(super) fn list_sort<T, F>(list: &mut List<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.is_singular() {
        return;
    }
    let ghost = list.ghost_node();
    let detached = match list.detach_all_nodes() {
        Some(detached) => detached,
        None => return,
    };
    // SAFETY: the detached nodes form a `next` chain ending at `ghost`, and
    // `ghost` is never dereferenced until the sorted range is attached.
    unsafe {
        let mut pending = Pending::new(ghost);
        let mut input = detached.front;
        let mut count = 0_usize;
        loop {
            let mut bits = count;
            let mut depth = 0;
            while bits & 1 == 1 {
                bits >>= 1;
                depth += 1;
            }
            if bits != 0 {
                pending.merge_at(depth, ghost, compare);
            }
            let next = input.as_ref().next;
            input.as_mut().next = ghost;
            pending.push(input);
            count += 1;
            input = next;
            if input == ghost {
                break;
            }
        }

        // At least two runs are pending here, since `count >= 2`.
        let mut run = pending.pop();
        while pending.len > 1 {
            run = merge(pending.pop(), run, ghost, compare);
        }
        let run = merge_final(pending.pop(), run, ghost, compare);
        list.attach_nodes(
            ghost,
            ghost,
            DetachedNodes::new(
                run.front,
                run.back,
                #[cfg(feature = "length")]
                detached.len,
            ),
        );
    }
}

/// Merge two `next` chains. On ties the node of `a` goes first.
unsafe fn merge<T, F>(mut a: Link<T>, mut b: Link<T>, end: Link<T>, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let head = if precedes(a, b, compare) {
        let next = a.as_ref().next;
        std::mem::replace(&mut a, next)
    } else {
        let next = b.as_ref().next;
        std::mem::replace(&mut b, next)
    };
    let mut tail = head;
    loop {
        if a == end {
            tail.as_mut().next = b;
            return head;
        }
        if b == end {
            tail.as_mut().next = a;
            return head;
        }
        if precedes(a, b, compare) {
            tail.as_mut().next = a;
            tail = a;
            a = a.as_ref().next;
        } else {
            tail.as_mut().next = b;
            tail = b;
            b = b.as_ref().next;
        }
    }
}

/// Like [`merge`], but also rebuilds the `prev` links, which makes the tail
/// of the longer chain cost a walk instead of a splice.
///
/// Every 256 nodes of that walk, `compare` is called with the same element
/// on both sides and its result ignored, giving the caller a chance to
/// yield on long, already sorted inputs.
unsafe fn merge_final<T, F>(
    mut a: Link<T>,
    mut b: Link<T>,
    end: Link<T>,
    compare: &mut F,
) -> Run<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let front = if precedes(a, b, compare) {
        let next = a.as_ref().next;
        std::mem::replace(&mut a, next)
    } else {
        let next = b.as_ref().next;
        std::mem::replace(&mut b, next)
    };
    let mut tail = front;
    loop {
        if a == end {
            break;
        }
        if b == end {
            b = a;
            break;
        }
        if precedes(a, b, compare) {
            connect(tail, a);
            tail = a;
            a = a.as_ref().next;
        } else {
            connect(tail, b);
            tail = b;
            b = b.as_ref().next;
        }
    }

    let mut count = 0_u8;
    loop {
        count = count.wrapping_add(1);
        if count == 0 {
            let _ = compare(&b.as_ref().element, &b.as_ref().element);
        }
        connect(tail, b);
        tail = b;
        b = b.as_ref().next;
        if b == end {
            break;
        }
    }
    Run { front, back: tail }
}
