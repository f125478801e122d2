//! Last-in, first-out stack.
//!
//! [`Stack`] restricts a [`DoublyLinkedList`] to LIFO access: elements are
//! pushed onto and popped from the tail. A stack may optionally be bounded,
//! in which case pushing onto a full stack evicts the oldest element from the
//! bottom. This suits "recently processed" histories that only need the last
//! few entries.
//!
//! # Examples
//!
//! ```rust
//! use coffer::Stack;
//!
//! let mut history = Stack::with_max_depth(2).unwrap();
//! assert_eq!(history.push("a"), None);
//! assert_eq!(history.push("b"), None);
//! assert_eq!(history.push("c"), Some("a")); // oldest entry evicted
//!
//! assert_eq!(history.pop(), Some("c"));
//! assert_eq!(history.peek(), Some(&"b"));
//! ```

use std::fmt;

use super::linked_list::{DoublyLinkedList, DoublyLinkedListIterator};
use crate::error::{CollectionError, CollectionResult};

/// A LIFO stack backed by a [`DoublyLinkedList`].
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<E> {
    list: DoublyLinkedList<E>,
    /// `None` for an unbounded stack.
    max_depth: Option<usize>,
}

impl<E> Stack<E> {
    /// Creates an empty, unbounded stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
            max_depth: None,
        }
    }

    /// Creates an empty stack that holds at most `max_depth` elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] when `max_depth` is zero.
    pub fn with_max_depth(max_depth: usize) -> CollectionResult<Self> {
        if max_depth == 0 {
            return Err(CollectionError::InvalidCapacity {
                capacity: max_depth,
            });
        }
        Ok(Self {
            list: DoublyLinkedList::new(),
            max_depth: Some(max_depth),
        })
    }

    /// Returns the depth bound, if any.
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// On a bounded stack that is already full, the bottom element is evicted
    /// and returned. Unbounded stacks always return `None`.
    pub fn push(&mut self, element: E) -> Option<E> {
        self.list.add_last(element);
        match self.max_depth {
            Some(depth) if self.list.len() > depth => self.list.remove_first(),
            _ => None,
        }
    }

    /// Removes and returns the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<E> {
        self.list.remove_last()
    }

    /// Returns the top element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&E> {
        self.list.back()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> std::iter::Rev<DoublyLinkedListIterator<'_, E>> {
        self.list.iter().rev()
    }
}

impl<E> Default for Stack<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for Stack<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        for element in iterable {
            self.push(element);
        }
    }
}

impl<E> FromIterator<E> for Stack<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iterable: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iterable);
        stack
    }
}

impl<E: fmt::Debug> fmt::Debug for Stack<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Serializes the elements bottom to top as a plain sequence.
///
/// The depth bound is not part of the serialized form.
#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for Stack<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.list, serializer)
    }
}

/// Deserializes a bottom-to-top sequence into an unbounded stack.
///
/// `max_depth()` of the result is always `None`; call
/// [`Stack::with_max_depth`] and push the elements to restore a bound.
#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for Stack<E>
where
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <DoublyLinkedList<E> as serde::Deserialize>::deserialize(deserializer).map(|list| Self {
            list,
            max_depth: None,
        })
    }
}
