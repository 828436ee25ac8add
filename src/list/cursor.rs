use crate::list::{List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the ghost node of the list.
///
/// # Examples
///
/// ```
/// use cyclic_queue::List;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert_eq!(cursor.previous(), Some(&'D'));
/// assert!(cursor.move_next().is_err());
/// ```
pub struct Cursor<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// A cursor over a `List` with editing operations.
///
/// The lifetime of its yielded references is tied to its own lifetime, instead
/// of just the underlying list, so a cursor cannot yield multiple elements at
/// once.
pub struct CursorMut<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.ghost_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid since it is a cyclic list.
                unsafe { self.current.as_ref().next }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid since it is a cyclic list.
                unsafe { self.current.as_ref().prev }
            }

            /// Move forward the cursor by given steps, without checking whether
            /// it will pass through the ghost node.
            unsafe fn seek_forward_fast(&mut self, steps: usize) {
                #[cfg(feature = "length")]
                {
                    self.index += steps;
                }
                (0..steps).for_each(|_| self.current = self.next_node());
            }

            /// Move backward the cursor by given steps, without checking whether
            /// it will pass through the ghost node.
            unsafe fn seek_backward_fast(&mut self, steps: usize) {
                #[cfg(feature = "length")]
                {
                    self.index -= steps;
                }
                (0..steps).for_each(|_| self.current = self.prev_node());
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor
            #[cfg(feature = "length")]
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, or return an error
            /// when it would pass through the ghost node.
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if self.is_ghost_node() {
                    return Err("`move_next` across ghost boundary");
                }
                #[cfg(feature = "length")]
                {
                    self.index += 1;
                }
                self.current = self.next_node();
                Ok(())
            }

            /// Move the cursor to the previous position, or return an error
            /// when it would pass through the ghost node.
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                if self.is_front_node() {
                    return Err("`move_prev` across ghost boundary");
                }
                #[cfg(feature = "length")]
                {
                    self.index -= 1;
                }
                self.current = self.prev_node();
                Ok(())
            }

            /// Move the cursor to the given position `target`, walking from
            /// whichever end of the list is nearer, or return an error when
            /// `target > len`. On error the cursor stays put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use cyclic_queue::List;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// assert_eq!(cursor.seek_to(5), Err(2));
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let len = self.list.len();
                if target > len {
                    return Err(target - len);
                }
                // SAFETY: both walks stay within `0..=len`.
                unsafe {
                    if target <= len - target {
                        self.move_to_start();
                        self.seek_forward_fast(target);
                    } else {
                        self.move_to_end();
                        self.seek_backward_fast(len - target);
                    }
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            #[inline]
            pub fn move_to_start(&mut self) {
                #[cfg(feature = "length")]
                {
                    self.index = 0;
                }
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end of the list (i.e. the ghost node).
            #[inline]
            pub fn move_to_end(&mut self) {
                #[cfg(feature = "length")]
                {
                    self.index = self.list.len();
                }
                self.current = self.list.ghost_node();
            }

            /// Return an immutable reference of current node of the cursor,
            /// or return `None` if it is located at the ghost node.
            pub fn current(&self) -> Option<&T> {
                if self.is_ghost_node() {
                    return None;
                }
                // SAFETY: non-ghost nodes always hold a valid element.
                unsafe { Some(&self.current.as_ref().element) }
            }

            /// Return an immutable reference of previous node of the cursor,
            /// or return `None` if it is located at the first node.
            pub fn previous(&self) -> Option<&T> {
                if self.is_front_node() {
                    return None;
                }
                // SAFETY: the previous node of a non-first node is never a ghost node.
                Some(unsafe { &self.prev_node().as_ref().element })
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut f = f.debug_struct(stringify!($CURSOR));
                f.field("list", &self.list)
                    .field("current", &self.current());
                #[cfg(feature = "length")]
                f.field("index", &self.index);
                f.finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a List<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
        list: &'a mut List<T>,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }

    /// Return a mutable reference of current node of the cursor,
    /// or return `None` if it is located at the ghost node.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: non-ghost nodes always hold a valid element.
        unsafe { Some(&mut self.current.as_mut().element) }
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.remove(), Some(5));
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        let next = self.next_node();
        // SAFETY: `self.current` is a valid non-ghost node in the list.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = next;
        Some(node.into_element())
    }

    /// Split the list into two after the current element (inclusive). This will
    /// return a new list consisting of everything after the cursor (inclusive),
    /// with the original list retaining everything before (exclusive).
    ///
    /// If the cursor is pointing at the ghost node, `None` will be returned.
    ///
    /// This operation should compute in *O*(1) time with the `length` feature.
    pub fn split(&mut self) -> Option<List<T>> {
        if self.is_ghost_node() {
            return None;
        }
        #[cfg(feature = "length")]
        let len = self.list.len - self.index;
        let back = self.list.back_node();
        // After splitting, the cursor is pointing to the ghost node.
        let current = std::mem::replace(&mut self.current, self.list.ghost_node());
        // SAFETY: since `current` is a non-ghost node, `current..=back` is a valid range.
        unsafe {
            Some(List::from_detached(self.list.detach_nodes(
                current,
                back,
                #[cfg(feature = "length")]
                len,
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;

    #[test]
    fn cursor_seek() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_start();
        for target in [0, 9, 3, 7, 10, 1] {
            assert!(cursor.seek_to(target).is_ok());
            #[cfg(feature = "length")]
            assert_eq!(cursor.index(), target);
            assert_eq!(cursor.current(), if target < 10 { Some(&target) } else { None });
        }
        assert_eq!(cursor.seek_to(12), Err(2));
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.previous(), Some(&0));

        let empty = List::<i32>::new();
        let mut cursor = empty.cursor_end();
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
    }

    #[test]
    fn cursor_steps_stop_at_ends() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor.current(), Some(&1));
        for expected in [Some(&2), Some(&3), None] {
            assert!(cursor.move_next().is_ok());
            assert_eq!(cursor.current(), expected);
        }
        assert!(cursor.move_next().is_err());
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 3);
        assert!(cursor.move_prev().is_ok());
        assert_eq!(cursor.current(), Some(&3));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn cursor_remove_and_split() {
        let mut list = List::from_iter(0..6);
        let mut cursor = list.cursor_mut(1);
        assert_eq!(cursor.remove(), Some(1));
        assert_eq!(cursor.current(), Some(&2));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 1);
        *cursor.current_mut().unwrap() += 10;

        assert!(cursor.move_next().is_ok());
        let tail = cursor.split().unwrap();
        assert_eq!(cursor.current(), None);
        assert!(cursor.split().is_none());
        assert_eq!(cursor.remove(), None);

        tail.assert_well_formed();
        assert_eq!(Vec::from_iter(tail), vec![3, 4, 5]);
        list.assert_well_formed();
        assert_eq!(Vec::from_iter(list), vec![0, 12]);
    }
}
