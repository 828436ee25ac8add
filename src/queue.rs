//! A queue of owned strings on top of [`List`].
//!
//! [`Queue`] is a `List<Element>`, so every generic operation of the list
//! (sorting, merging, reversing, shuffling) applies to it directly. This
//! module adds the string-facing API: fallible insertion that copies the
//! caller's string, removal into a NUL-terminated byte buffer, and thin
//! wrappers that report errors through [`QueueError`].
use crate::error::{QueueError, Result};
use crate::list::List;
use std::fmt;

/// A queue of string elements.
pub type Queue = List<Element>;

/// An element of a [`Queue`], owning a copy of its string.
///
/// Elements order lexicographically by their bytes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    /// Copy `value` into a new element, or report
    /// [`QueueError::OutOfMemory`] if the copy cannot be allocated.
    pub fn new(value: &str) -> Result<Self> {
        let mut owned = String::new();
        owned.try_reserve_exact(value.len())?;
        owned.push_str(value);
        Ok(Element { value: owned })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the string into `buf` as a NUL-terminated byte string, truncated
    /// to `buf.len() - 1` bytes, and return the number of bytes copied before
    /// the terminator. Nothing is written to an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Element;
    ///
    /// let element = Element::new("hello").unwrap();
    /// let mut buf = [0xff_u8; 4];
    /// assert_eq!(element.copy_to(&mut buf), 3);
    /// assert_eq!(&buf, b"hel\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let capacity = match buf.len().checked_sub(1) {
            Some(capacity) => capacity,
            None => return 0,
        };
        let bytes = self.value.as_bytes();
        let copied = bytes.len().min(capacity);
        buf[..copied].copy_from_slice(&bytes[..copied]);
        buf[copied] = 0;
        copied
    }
}

impl TryFrom<&str> for Element {
    type Error = QueueError;

    fn try_from(value: &str) -> Result<Self> {
        Element::new(value)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl List<Element> {
    /// Insert a copy of `value` at the head of the queue.
    ///
    /// On allocation failure the queue is unchanged and
    /// [`QueueError::OutOfMemory`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_head("b")?;
    /// queue.insert_head("a")?;
    /// assert_eq!(queue.front().map(|e| e.value()), Some("a"));
    /// # Ok::<(), cyclic_queue::QueueError>(())
    /// ```
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        self.try_push_front(Element::new(value)?)
    }

    /// Insert a copy of `value` at the tail of the queue.
    ///
    /// On allocation failure the queue is unchanged and
    /// [`QueueError::OutOfMemory`] is returned.
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        self.try_push_back(Element::new(value)?)
    }

    /// Remove the head element and return it, or `None` if the queue is
    /// empty. If `buf` is given, the string is also copied into it with
    /// [`Element::copy_to`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("queue")?;
    ///
    /// let mut buf = [0_u8; 4];
    /// let element = queue.remove_head(Some(&mut buf[..]));
    /// assert_eq!(element.map(|e| e.into_value()), Some(String::from("queue")));
    /// assert_eq!(&buf, b"que\0");
    /// assert!(queue.remove_head(None).is_none());
    /// # Ok::<(), cyclic_queue::QueueError>(())
    /// ```
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = self.pop_front()?;
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Remove the tail element and return it, or `None` if the queue is
    /// empty. If `buf` is given, the string is also copied into it with
    /// [`Element::copy_to`].
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Option<Element> {
        let element = self.pop_back()?;
        if let Some(buf) = buf {
            element.copy_to(buf);
        }
        Some(element)
    }

    /// Return the number of elements in the queue.
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Delete the middle element, at index `size / 2`.
    ///
    /// Returns [`QueueError::Empty`] if there is nothing to delete.
    pub fn delete_mid(&mut self) -> Result<()> {
        self.remove_middle().map(drop).ok_or(QueueError::Empty)
    }

    /// Delete every element whose string equals that of a neighbor, and
    /// return how many were deleted.
    ///
    /// Only adjacent duplicates are detected, so the queue is expected to be
    /// sorted first; equal strings apart from each other in an unsorted
    /// queue all survive.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// for value in ["3", "1", "4", "1", "5"] {
    ///     queue.insert_tail(value)?;
    /// }
    /// queue.sort();
    /// assert_eq!(queue.delete_dup(), 2);
    /// let values: Vec<_> = queue.iter().map(|e| e.value()).collect();
    /// assert_eq!(values, ["3", "4", "5"]);
    /// # Ok::<(), cyclic_queue::QueueError>(())
    /// ```
    pub fn delete_dup(&mut self) -> usize {
        self.remove_duplicate_runs()
    }

    /// Swap every two adjacent elements. See [`List::swap_pairs`].
    pub fn swap(&mut self) {
        self.swap_pairs();
    }

    /// Reverse each consecutive block of `k` elements. See
    /// [`List::reverse_chunks`].
    ///
    /// Returns [`QueueError::InvalidInput`] if `k == 0`.
    pub fn reverse_k(&mut self, k: usize) -> Result<()> {
        if k == 0 {
            return Err(QueueError::InvalidInput("block size must be positive"));
        }
        self.reverse_chunks(k);
        Ok(())
    }

    /// Delete every element that has a strictly greater element after it,
    /// and return the new size. See [`List::retain_suffix_maxima`].
    pub fn descend(&mut self) -> usize {
        self.retain_suffix_maxima()
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, Queue};
    use crate::error::QueueError;
    use crate::list::{List, SortStrategy};

    fn queue_of(values: &[&str]) -> Queue {
        let mut queue = Queue::new();
        for value in values {
            queue.insert_tail(value).unwrap();
        }
        queue
    }

    fn values_of(queue: &Queue) -> Vec<&str> {
        queue.iter().map(Element::value).collect()
    }

    #[test]
    fn queue_insert_and_remove() {
        let mut queue = Queue::new();
        assert_eq!(queue.size(), 0);
        assert!(queue.remove_head(None).is_none());
        assert!(queue.remove_tail(None).is_none());

        queue.insert_tail("b").unwrap();
        queue.insert_head("a").unwrap();
        queue.insert_tail("c").unwrap();
        queue.assert_well_formed();
        assert_eq!(queue.size(), 3);
        assert_eq!(values_of(&queue), ["a", "b", "c"]);

        let mut buf = [0xff_u8; 8];
        let tail = queue.remove_tail(Some(&mut buf[..])).unwrap();
        assert_eq!(tail.value(), "c");
        assert_eq!(&buf[..2], b"c\0");
        let head = queue.remove_head(Some(&mut [][..])).unwrap();
        assert_eq!(head.into_value(), "a");
        assert_eq!(values_of(&queue), ["b"]);
    }

    #[test]
    fn element_copy_truncates() {
        let element = Element::try_from("abcdef").unwrap();
        assert_eq!(element.to_string(), "abcdef");

        let mut empty: [u8; 0] = [];
        assert_eq!(element.copy_to(&mut empty), 0);

        let mut one = [0xff_u8; 1];
        assert_eq!(element.copy_to(&mut one), 0);
        assert_eq!(one, [0]);

        let mut exact = [0xff_u8; 7];
        assert_eq!(element.copy_to(&mut exact), 6);
        assert_eq!(&exact, b"abcdef\0");

        let mut large = [0xff_u8; 10];
        assert_eq!(element.copy_to(&mut large), 6);
        assert_eq!(&large[..7], b"abcdef\0");
        assert_eq!(large[7], 0xff);
    }

    #[test]
    fn queue_sort_scenarios() {
        for strategy in [SortStrategy::TopDown, SortStrategy::Adaptive] {
            let mut queue = queue_of(&["a", "b", "c"]);
            queue.sort_with(strategy);
            assert_eq!(values_of(&queue), ["a", "b", "c"]);

            let mut queue = queue_of(&["c", "a", "b"]);
            queue.sort_with(strategy);
            queue.assert_well_formed();
            assert_eq!(values_of(&queue), ["a", "b", "c"]);
        }
    }

    #[test]
    fn queue_delete_dup() {
        let mut queue = queue_of(&["3", "1", "4", "1", "5"]);
        queue.sort();
        assert_eq!(values_of(&queue), ["1", "1", "3", "4", "5"]);
        assert_eq!(queue.delete_dup(), 2);
        queue.assert_well_formed();
        assert_eq!(values_of(&queue), ["3", "4", "5"]);
    }

    #[test]
    fn queue_delete_mid() {
        let mut queue = queue_of(&["a", "b", "c", "d"]);
        assert_eq!(queue.delete_mid(), Ok(()));
        assert_eq!(values_of(&queue), ["a", "b", "d"]);
        assert_eq!(queue.delete_mid(), Ok(()));
        assert_eq!(values_of(&queue), ["a", "d"]);
        assert_eq!(queue.delete_mid(), Ok(()));
        assert_eq!(queue.delete_mid(), Ok(()));
        assert_eq!(queue.delete_mid(), Err(QueueError::Empty));
    }

    #[test]
    fn queue_descend() {
        let mut queue = queue_of(&["5", "3", "8", "2"]);
        assert_eq!(queue.descend(), 2);
        queue.assert_well_formed();
        assert_eq!(values_of(&queue), ["8", "2"]);
    }

    #[test]
    fn queue_reorder() {
        let mut queue = queue_of(&["a", "b", "c", "d", "e"]);
        queue.swap();
        assert_eq!(values_of(&queue), ["b", "a", "d", "c", "e"]);
        queue.reverse();
        assert_eq!(values_of(&queue), ["e", "c", "d", "a", "b"]);
        assert_eq!(queue.reverse_k(2), Ok(()));
        assert_eq!(values_of(&queue), ["c", "e", "a", "d", "b"]);
        assert_eq!(
            queue.reverse_k(0),
            Err(QueueError::InvalidInput("block size must be positive"))
        );
        queue.assert_well_formed();
    }

    #[test]
    fn queue_merge_and_shuffle() {
        let mut chain = List::from_iter([
            queue_of(&["b", "d"]),
            queue_of(&["a", "e"]),
            queue_of(&["c"]),
        ]);
        assert_eq!(chain.merge_all(), 5);
        let mut merged = chain.pop_front().unwrap();
        assert_eq!(values_of(&merged), ["a", "b", "c", "d", "e"]);

        let mut other = merged.clone();
        merged.shuffle();
        other.shuffle();
        merged.assert_well_formed();
        assert_eq!(merged, other);
        merged.sort();
        assert_eq!(values_of(&merged), ["a", "b", "c", "d", "e"]);
    }
}
