use super::merge::{merge_runs, Run};
use crate::list::{DetachedNodes, List, Node};
use std::cmp::Ordering;
use std::ptr::NonNull;

/// Top-down merge sort of the whole list.
///
/// The nodes are detached while being sorted, so a panicking comparator
/// leaks them and leaves the list empty.
pub(super) fn merge_sort<T, F>(list: &mut List<T>, compare: &mut F)
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
    let run = Run {
        front: detached.front,
        back: detached.back,
    };
    // SAFETY: the detached range still ends at `ghost`, which is no longer
    // linked to it, so it is a valid run terminated by `ghost`.
    unsafe {
        let run = sort_run(run, ghost, compare);
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

unsafe fn sort_run<T, F>(run: Run<T>, end: NonNull<Node<T>>, compare: &mut F) -> Run<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if run.front == run.back {
        return run;
    }
    let mid = middle_of(run.front, end);
    let right = Run {
        front: mid.as_ref().next,
        back: run.back,
    };
    let left = Run {
        front: run.front,
        back: cut_after(mid, end),
    };
    let left = sort_run(left, end, compare);
    let right = sort_run(right, end, compare);
    merge_runs(left, right, end, compare)
}

/// Find the last node of the left half of the run starting at `front`, so
/// that the left half gets the extra node of an odd run.
unsafe fn middle_of<T>(front: NonNull<Node<T>>, end: NonNull<Node<T>>) -> NonNull<Node<T>> {
    let (mut slow, mut fast) = (front, front.as_ref().next);
    while fast != end && fast.as_ref().next != end {
        slow = slow.as_ref().next;
        fast = fast.as_ref().next.as_ref().next;
    }
    slow
}

/// Terminate the run at `node` and return it as the new back.
unsafe fn cut_after<T>(mut node: NonNull<Node<T>>, end: NonNull<Node<T>>) -> NonNull<Node<T>> {
    node.as_mut().next = end;
    node
}
