//! This crate provides a doubly-linked list with owned nodes, implemented as a
//! cyclic list, together with the in-place algorithms of a queue: two merge
//! sorts, merging of sorted lists, reordering, and shuffling. A string queue,
//! [`Queue`], is built on top of it.
//!
//! The [`List`] allows inserting and removing elements at any given position
//! in constant time. In compromise, accessing or mutating elements at any
//! position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//! for value in ["c", "a", "b", "a"] {
//!     queue.insert_tail(value)?;
//! }
//!
//! queue.sort();
//! assert_eq!(queue.delete_dup(), 2); // both "a" are gone
//!
//! let mut buf = [0_u8; 8];
//! let head = queue.remove_head(Some(&mut buf[..]));
//! assert_eq!(head.map(|e| e.into_value()), Some(String::from("b")));
//! assert_eq!(&buf[..2], b"b\0");
//! # Ok::<(), cyclic_queue::QueueError>(())
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║   (len)   ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `ghost` that points to the ghost node;
//! - a length field `len` indicating the length of the list. It can be disabled by
//!   disabling the `length` feature in your `Cargo.toml`, at the cost of an
//!   *O*(*n*) [`List::len`]:
//! ```text
//! [dependencies]
//! cyclic_queue = { default-features = false }
//! ```
//!
//! Each node of the list `List<T>` is allocated on heap, and holds the `next`
//! and `prev` pointers and the payload `T`. The ghost node has *NO* payload.
//! In an empty list, the `next` and `prev` pointers of the ghost node point to
//! itself.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the ghost node is always indexed by *n*.
//!
//! # Iteration and Cursors
//!
//! [`Iter`] and [`IterMut`] are double-ended iterators that walk the list like
//! an array (fused and non-cyclic). The cursors [`Cursor`] and [`CursorMut`]
//! seek to a position by index, walking from the nearer end, and a
//! [`CursorMut`] can [`remove`] the element there or [`split`] the list.
//!
//! ```
//! use cyclic_queue::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4, 5]);
//!
//! let mut cursor = list.cursor_start_mut();
//! assert!(cursor.seek_to(3).is_ok());
//! assert_eq!(cursor.remove(), Some(4)); // becomes [1, 2, 3, 5], points to 5
//! assert_eq!(cursor.current(), Some(&5));
//!
//! assert!(cursor.move_prev().is_ok());
//! let tail = cursor.split().unwrap(); // splits off [3, 5]
//! assert_eq!(Vec::from_iter(tail), vec![3, 5]);
//! assert_eq!(Vec::from_iter(list), vec![1, 2]);
//! ```
//!
//! # Algorithms
//!
//! All algorithms relink nodes in place; no element is moved or cloned.
//!
//! - Sorting ([`List::sort`] and friends) is a stable merge sort. The
//!   [`SortStrategy`] selects a recursive top-down sort, or a bottom-up sort in
//!   the manner of the Linux kernel's `list_sort`. The `adaptive-sort` feature
//!   makes the latter the default.
//! - [`List::merge`] merges two sorted lists, and [`List::merge_all`] merges a
//!   whole list of sorted lists pairwise.
//! - [`List::reverse`], [`List::reverse_chunks`] and [`List::swap_pairs`]
//!   reorder the nodes.
//! - [`List::remove_middle`], [`List::remove_duplicate_runs`] and
//!   [`List::retain_suffix_maxima`] delete nodes by position or by value.
//! - [`List::shuffle`] and [`List::shuffle_with`] shuffle the list with the
//!   Fisher-Yates algorithm.
//!
//! ```
//! use cyclic_queue::List;
//!
//! let mut list = List::from_iter([5, 3, 8, 2, 8]);
//! list.sort();
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 3, 5, 8, 8]);
//!
//! list.reverse_chunks(2);
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec![3, 2, 8, 5, 8]);
//!
//! assert_eq!(list.retain_suffix_maxima(), 2);
//! assert_eq!(Vec::from_iter(list), vec![8, 8]);
//! ```
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`split`]: crate::list::cursor::CursorMut::split

#[doc(inline)]
pub use error::{QueueError, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{List, SortStrategy, SHUFFLE_SEED};
#[doc(inline)]
pub use queue::{Element, Queue};

pub mod error;
pub mod list;
pub mod queue;
