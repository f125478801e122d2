//! First-in, first-out queue.
//!
//! [`Queue`] restricts a [`DoublyLinkedList`] to FIFO access: elements are
//! offered at the tail and polled from the head.
//!
//! # Examples
//!
//! ```rust
//! use coffer::Queue;
//!
//! let mut pending = Queue::new();
//! pending.offer("receipt-1");
//! pending.offer("receipt-2");
//!
//! assert_eq!(pending.peek(), Some(&"receipt-1"));
//! assert_eq!(pending.poll(), Some("receipt-1"));
//! assert_eq!(pending.len(), 1);
//! ```

use std::fmt;

use super::linked_list::{DoublyLinkedList, DoublyLinkedListIterator};

/// A FIFO queue backed by a [`DoublyLinkedList`].
///
/// [`peek`](Self::peek) inspects the head without removing it; use
/// [`poll`](Self::poll) to consume it.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<E> {
    list: DoublyLinkedList<E>,
}

impl<E> Queue<E> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Adds an element at the back of the queue.
    pub fn offer(&mut self, element: E) {
        self.list.add_last(element);
    }

    /// Removes and returns the element at the front, or `None` if empty.
    pub fn poll(&mut self) -> Option<E> {
        self.list.remove_first()
    }

    /// Returns the element at the front without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&E> {
        self.list.front()
    }

    /// Removes the first queued element matching `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::Queue;
    ///
    /// let mut pending: Queue<u32> = (1..=3).collect();
    /// assert_eq!(pending.remove_first_match(|id| *id == 2), Some(2));
    /// assert_eq!(pending.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove_first_match<P>(&mut self, predicate: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        self.list.remove_first_match(predicate)
    }

    /// Returns the number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> DoublyLinkedListIterator<'_, E> {
        self.list.iter()
    }
}

impl<E> Default for Queue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for Queue<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        self.list.extend(iterable);
    }
}

impl<E> FromIterator<E> for Queue<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iterable: I) -> Self {
        Self {
            list: iterable.into_iter().collect(),
        }
    }
}

impl<'a, E> IntoIterator for &'a Queue<E> {
    type Item = &'a E;
    type IntoIter = DoublyLinkedListIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for Queue<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Queue").field(&self.list).finish()
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for Queue<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.list, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for Queue<E>
where
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <DoublyLinkedList<E> as serde::Deserialize>::deserialize(deserializer).map(|list| Self { list })
    }
}
