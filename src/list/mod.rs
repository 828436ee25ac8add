use std::alloc::{alloc, Layout};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{QueueError, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::{SortStrategy, SHUFFLE_SEED};

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic
/// list around a ghost (sentinel) node.
///
/// Insertion, removal and splicing at a known position take *O*(1) time; the
/// reordering algorithms (sorting, merging, reversing, shuffling) relink the
/// nodes in place and never move or clone an element.
///
/// The `List` contains:
/// - a pointer `ghost` to the ghost node, which carries no payload;
/// - a length field `len`. It can be disabled by disabling the `length`
///   feature, in which case [`List::len`] counts the nodes.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    ghost: NonNull<Node<Erased>>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

struct Erased;

/// Nodes fragment detached from a list, used in list splitting, splicing
/// and merging.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Link `prev` and `next` to each other.
///
/// It is unsafe because both must point to live nodes.
#[inline]
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

/// Move the node `node` to the position right before `to`.
///
/// Both nodes must belong to the same list, and `node != to`.
pub(crate) unsafe fn move_node<T>(node: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    move_nodes(node, node, to);
}

/// Move the node `node` to the position right after `to`.
///
/// Both nodes must belong to the same list, and `node != to`.
pub(crate) unsafe fn move_node_after<T>(node: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    debug_assert_ne!(node, to, "Cannot move a node after itself");
    connect(node.as_ref().prev, node.as_ref().next);
    connect(node, to.as_ref().next);
    connect(to, node);
}

/// Move the range `from_front..=from_back` to the position right before `to`.
///
/// `to` must not lie inside the range.
pub(crate) unsafe fn move_nodes<T>(
    from_front: NonNull<Node<T>>,
    from_back: NonNull<Node<T>>,
    to: NonNull<Node<T>>,
) {
    debug_assert_ne!(from_front, to, "Cannot move a range before itself");
    connect(from_front.as_ref().prev, from_back.as_ref().next);
    connect(to.as_ref().prev, from_front);
    connect(from_back, to);
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { self.ghost_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { self.ghost_node().as_ref().prev }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        connect(node.as_ref().prev, node.as_ref().next);
        Box::from_raw(node.as_ptr())
    }

    /// Attach a single detached node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belong
    /// to the list, or whether they are adjacent (only in `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// of the list holding exactly `len` nodes.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        #[cfg(feature = "length")] len: usize,
    ) -> DetachedNodes<T> {
        #[cfg(feature = "length")]
        {
            self.len -= len;
        }
        connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(
            front,
            back,
            #[cfg(feature = "length")]
            len,
        )
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belong
    /// to the list, or whether they are adjacent (only in `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        #[cfg(feature = "length")]
        {
            self.len += detached.len;
        }
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `front_node()..=back_node()` is the whole, non-empty list.
        unsafe {
            Some(self.detach_nodes(
                self.front_node(),
                self.back_node(),
                #[cfg(feature = "length")]
                self.len,
            ))
        }
    }

    /// Construct a list from detached nodes.
    pub(crate) fn from_detached(detached: DetachedNodes<T>) -> Self {
        let mut list = List::new();
        // SAFETY: the ghost node of an empty list is adjacent to itself.
        unsafe {
            list.attach_nodes(list.ghost_node(), list.ghost_node(), detached);
        }
        list
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = new_ghost();
        #[cfg(feature = "length")]
        let len = 0;
        let _marker = PhantomData;
        Self {
            ghost,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns `true` if the `List` holds exactly one element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(!list.is_singular());
    /// list.push_back(1);
    /// assert!(list.is_singular());
    /// list.push_back(2);
    /// assert!(!list.is_singular());
    /// ```
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.front_node() == self.back_node()
    }

    /// Returns the length of the `List`.
    ///
    /// This operation should compute in *O*(1) time.
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the length of the `List`.
    ///
    /// Without the `length` feature the nodes are counted, in *O*(*n*) time.
    #[cfg(not(feature = "length"))]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List`.
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list holds a valid element.
        Some(unsafe { &self.front_node().as_ref().element })
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list holds a valid element.
        Some(unsafe { &mut self.front_node().as_mut().element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list holds a valid element.
        Some(unsafe { &self.back_node().as_ref().element })
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list holds a valid element.
        Some(unsafe { &mut self.back_node().as_mut().element })
    }

    /// Adds an element first in the list.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the ghost node and the front node are adjacent in the list.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) }
    }

    /// Appends an element to the back of a list.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the back node and the ghost node are adjacent in the list.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) }
    }

    /// Like [`List::push_front`], but reports an allocation failure instead of
    /// aborting. The list is left untouched on failure and `elt` is dropped.
    pub fn try_push_front(&mut self, elt: T) -> Result<()> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: the ghost node and the front node are adjacent in the list.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) }
        Ok(())
    }

    /// Like [`List::push_back`], but reports an allocation failure instead of
    /// aborting. The list is left untouched on failure and `elt` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.try_push_back("a").is_ok());
    /// assert_eq!(list.back(), Some(&"a"));
    /// ```
    pub fn try_push_back(&mut self, elt: T) -> Result<()> {
        let node = Node::try_new_detached(elt)?;
        // SAFETY: the back node and the ghost node are adjacent in the list.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) }
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is a valid non-ghost node.
        Some(unsafe { self.detach_node(self.front_node()) }.into_element())
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is a valid non-ghost node.
        Some(unsafe { self.detach_node(self.back_node()) }.into_element())
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the ghost node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        if cursor.seek_to(at).is_err() {
            panic!("Cannot create cursor at a nonexistent index");
        }
        cursor
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the ghost node if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor at the ghost node.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.ghost_node(),
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides a cursor with editing operations at the node with given index.
    ///
    /// By convention, the cursor is pointing to the ghost node if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert_eq!(list.cursor_mut(3).current_mut(), None);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        if cursor.seek_to(at).is_err() {
            panic!("Cannot create cursor at a nonexistent index");
        }
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(
            self.front_node(),
            #[cfg(feature = "length")]
            0,
            self,
        )
    }

    /// Provides a cursor with editing operations at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(
            self.ghost_node(),
            #[cfg(feature = "length")]
            self.len,
            self,
        )
    }

    /// Provides a forward iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list1 = List::from_iter(['a']);
    /// let mut list2 = List::from_iter(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(Vec::from_iter(list1), vec!['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: `self.back_node()` and `self.ghost_node()` are adjacent.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }

    /// Moves all elements from `other` to the beginning of the list.
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: `self.ghost_node()` and `self.front_node()` are adjacent.
            unsafe { self.attach_nodes(self.ghost_node(), self.front_node(), detached) }
        }
    }

    /// Splits the list into two at the given index. Returns everything after
    /// the given index (inclusive).
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let split = list.split_off(2);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2]);
    /// assert_eq!(Vec::from_iter(split), vec![3]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> List<T> {
        self.cursor_mut(at).split().unwrap_or_default()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        });
        NonNull::from(Box::leak(node))
    }

    /// Create a detached node with given element, or report an allocation
    /// failure. The node is allocated with the layout of `Box<Node<T>>`, so it
    /// can be released by `Box::from_raw`.
    pub(crate) fn try_new_detached(element: T) -> Result<NonNull<Node<T>>> {
        let layout = Layout::new::<Node<T>>();
        // SAFETY: `Node<T>` holds two pointers, so `layout` has a non-zero size.
        let ptr = unsafe { alloc(layout) }.cast::<Node<T>>();
        let node = NonNull::new(ptr).ok_or(QueueError::OutOfMemory("list node"))?;
        // SAFETY: `node` is freshly allocated for a `Node<T>` and not yet initialized.
        unsafe {
            node.as_ptr().write(Node {
                next: NonNull::dangling(),
                prev: NonNull::dangling(),
                element,
            });
        }
        Ok(node)
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> DetachedNodes<T> {
    /// It is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range and its length must be equal to `len` (with
    /// `#[cfg(feature = "length")]`).
    pub(crate) unsafe fn new(
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        #[cfg(feature = "length")] len: usize,
    ) -> Self {
        let _marker = PhantomData;
        #[cfg(feature = "length")]
        debug_assert!(len > 0, "Cannot detach nodes of length 0");
        Self {
            front,
            back,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }
}

fn new_ghost() -> NonNull<Node<Erased>> {
    let ghost = NonNull::from(Box::leak(Box::new(Node {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        element: Erased,
    })));
    // SAFETY: `ghost` was just leaked from a box, and the ghost of an empty
    // list links to itself.
    unsafe { connect(ghost, ghost) };
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost node was leaked from a box in `new_ghost`, and no
        // node links to it anymore.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) };
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the whole cycle, checking every link pair and the cached length.
    pub(crate) fn assert_well_formed(&self) {
        let ghost = self.ghost_node();
        let mut node = ghost;
        let mut count = 0;
        loop {
            // SAFETY: every node reachable from the ghost is live.
            let next = unsafe { node.as_ref().next };
            unsafe {
                assert_eq!(next.as_ref().prev, node, "broken `prev` link");
            }
            if next == ghost {
                break;
            }
            count += 1;
            node = next;
        }
        assert_eq!(count, self.len(), "length does not match the nodes");
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert!(!list.is_singular());
        list.push_back(1);
        assert!(!list.is_empty());
        assert!(list.is_singular());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        for value in 1..=3 {
            list.push_back(DropChecker {
                value,
                dropped: &dropped,
            });
        }
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.assert_well_formed();
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_try_push() {
        let mut list = List::new();
        assert_eq!(list.try_push_back(String::from("b")), Ok(()));
        assert_eq!(list.try_push_front(String::from("a")), Ok(()));
        list.assert_well_formed();
        assert_eq!(Vec::from_iter(list), vec!["a", "b"]);
    }

    #[test]
    fn list_split_and_append() {
        let mut list = List::from_iter(0..5);
        let mut other = List::from_iter(5..7);
        list.append(&mut other);
        assert!(other.is_empty());
        assert_eq!(list, List::from_iter(0..7));
        list.assert_well_formed();

        let mut split = list.split_off(5);
        assert_eq!(list, List::from_iter(0..5));
        assert_eq!(split, List::from_iter(5..7));
        list.assert_well_formed();
        split.assert_well_formed();

        split.prepend(&mut list);
        assert!(list.is_empty());
        assert_eq!(split, List::from_iter(0..7));
        assert_eq!(split.len(), 7);

        assert!(split.split_off(7).is_empty());
        assert_eq!(split.split_off(0), List::from_iter(0..7));
        assert!(split.is_empty());
    }

    #[test]
    #[should_panic]
    fn list_split_out_of_bounds() {
        let mut list = List::from_iter(0..3);
        list.split_off(4);
    }

    #[test]
    fn list_move_nodes() {
        use crate::list::{move_node, move_node_after};

        let list = List::from_iter(0..4);
        let ghost = list.ghost_node();
        let front = list.front_node();
        let back = list.back_node();
        unsafe {
            move_node(back, front);
            move_node_after(front, ghost);
        }
        list.assert_well_formed();
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 3, 1, 2]);

        let back = list.back_node();
        unsafe { move_node_after(back, ghost) };
        list.assert_well_formed();
        assert_eq!(Vec::from_iter(list), vec![2, 0, 3, 1]);
    }
}
