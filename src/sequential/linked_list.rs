//! Doubly linked list with O(1) access at both ends.
//!
//! This module provides [`DoublyLinkedList`], the sequence that backs
//! [`Queue`](super::Queue) and [`Stack`](super::Stack).
//!
//! # Internal Structure
//!
//! Nodes live in an arena of slots addressed by stable indices. Each
//! [`DoublyLinkedNode`] records the index of its successor (the forward,
//! owning direction of the chain) and the index of its predecessor (a
//! navigation-only back link). Vacated slots are threaded onto a free list
//! and reused by later insertions; the arena is released wholesale when the
//! list becomes empty.
//!
//! The list maintains:
//! 1. `head` has no predecessor and `tail` has no successor
//! 2. Following `next` from `head` reaches `tail` in exactly `len - 1` steps
//! 3. `head` and `tail` are both `None` exactly when the list is empty
//!
//! # Examples
//!
//! ```rust
//! use coffer::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.add_last(2);
//! list.add_first(1);
//! list.add_last(3);
//!
//! assert_eq!(list.remove_first(), Some(1));
//! assert_eq!(list.remove_last(), Some(3));
//! assert_eq!(list.len(), 1);
//! ```

use std::fmt;
use std::iter::FromIterator;

// =============================================================================
// Node Definition
// =============================================================================

/// A node of a [`DoublyLinkedList`].
#[derive(Clone, Debug)]
pub struct DoublyLinkedNode<E> {
    element: E,
    /// Back link; used for navigation only.
    previous: Option<usize>,
    next: Option<usize>,
}

impl<E> DoublyLinkedNode<E> {
    const fn new(element: E) -> Self {
        Self {
            element,
            previous: None,
            next: None,
        }
    }

    /// Returns the element stored in this node.
    pub const fn element(&self) -> &E {
        &self.element
    }
}

/// An arena slot.
#[derive(Clone, Debug)]
enum Slot<E> {
    Occupied(DoublyLinkedNode<E>),
    Vacant { next_free: Option<usize> },
}

// =============================================================================
// DoublyLinkedList Definition
// =============================================================================

/// A doubly linked list supporting O(1) insertion and removal at both ends.
///
/// Removing from an empty list yields `None` rather than an error.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `add_first`    | O(1)       |
/// | `add_last`     | O(1)       |
/// | `remove_first` | O(1)       |
/// | `remove_last`  | O(1)       |
/// | `front`/`back` | O(1)       |
/// | `len`          | O(1)       |
#[derive(Clone)]
pub struct DoublyLinkedList<E> {
    slots: Vec<Slot<E>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<E> DoublyLinkedList<E> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    fn node(&self, index: usize) -> Option<&DoublyLinkedNode<E>> {
        match self.slots.get(index)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut DoublyLinkedNode<E>> {
        match self.slots.get_mut(index)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Stores `node` in a free slot (or a new one) and returns its index.
    fn allocate(&mut self, node: DoublyLinkedNode<E>) -> usize {
        match self.free {
            Some(index) => {
                if let Slot::Vacant { next_free } = self.slots[index] {
                    self.free = next_free;
                }
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacates the slot at `index` and returns the node it held.
    fn release(&mut self, index: usize) -> Option<DoublyLinkedNode<E>> {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(node) => {
                self.length -= 1;
                if self.length == 0 {
                    self.slots.clear();
                    self.free = None;
                } else {
                    self.free = Some(index);
                }
                Some(node)
            }
            slot @ Slot::Vacant { .. } => {
                self.slots[index] = slot;
                None
            }
        }
    }

    /// Inserts an element at the head of the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.add_first(2);
    /// list.add_first(1);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn add_first(&mut self, element: E) {
        let mut node = DoublyLinkedNode::new(element);
        node.next = self.head;
        let index = self.allocate(node);
        match self.head.and_then(|head| self.node_mut(head)) {
            Some(old_head) => old_head.previous = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.length += 1;
    }

    /// Inserts an element at the tail of the list.
    pub fn add_last(&mut self, element: E) {
        let mut node = DoublyLinkedNode::new(element);
        node.previous = self.tail;
        let index = self.allocate(node);
        match self.tail.and_then(|tail| self.node_mut(tail)) {
            Some(old_tail) => old_tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    /// Removes and returns the head element, or `None` if the list is empty.
    pub fn remove_first(&mut self) -> Option<E> {
        let head = self.head?;
        let node = self.release(head)?;
        self.head = node.next;
        match node.next.and_then(|next| self.node_mut(next)) {
            Some(new_head) => new_head.previous = None,
            None => self.tail = None,
        }
        Some(node.element)
    }

    /// Removes and returns the tail element, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<i32> = (1..=2).collect();
    /// assert_eq!(list.remove_last(), Some(2));
    /// assert_eq!(list.remove_last(), Some(1));
    /// assert_eq!(list.remove_last(), None);
    /// ```
    pub fn remove_last(&mut self) -> Option<E> {
        let tail = self.tail?;
        let node = self.release(tail)?;
        self.tail = node.previous;
        match node.previous.and_then(|previous| self.node_mut(previous)) {
            Some(new_tail) => new_tail.next = None,
            None => self.head = None,
        }
        Some(node.element)
    }

    /// Removes the first element matching `predicate` and returns it.
    ///
    /// This walks the list from the head, so it is O(n).
    pub fn remove_first_match<P>(&mut self, mut predicate: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.node(index)?;
            if predicate(&node.element) {
                return self.unlink(index);
            }
            cursor = node.next;
        }
        None
    }

    /// Detaches the node at `index` from its neighbours and frees its slot.
    fn unlink(&mut self, index: usize) -> Option<E> {
        let node = self.release(index)?;
        match node.previous.and_then(|previous| self.node_mut(previous)) {
            Some(previous) => previous.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.node_mut(next)) {
            Some(next) => next.previous = node.previous,
            None => self.tail = node.previous,
        }
        if self.length == 0 {
            self.head = None;
            self.tail = None;
        }
        Some(node.element)
    }

    /// Returns the head element without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&E> {
        self.node(self.head?).map(DoublyLinkedNode::element)
    }

    /// Returns the tail element without removing it.
    #[must_use]
    pub fn back(&self) -> Option<&E> {
        self.node(self.tail?).map(DoublyLinkedNode::element)
    }

    /// Returns a mutable reference to the head element.
    pub fn front_mut(&mut self) -> Option<&mut E> {
        let head = self.head?;
        self.node_mut(head).map(|node| &mut node.element)
    }

    /// Returns a mutable reference to the tail element.
    pub fn back_mut(&mut self) -> Option<&mut E> {
        let tail = self.tail?;
        self.node_mut(tail).map(|node| &mut node.element)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Returns an iterator from head to tail.
    pub fn iter(&self) -> DoublyLinkedListIterator<'_, E> {
        DoublyLinkedListIterator {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`DoublyLinkedList`], head to tail.
pub struct DoublyLinkedListIterator<'a, E> {
    list: &'a DoublyLinkedList<E>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, E> Iterator for DoublyLinkedListIterator<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> DoubleEndedIterator for DoublyLinkedListIterator<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?)?;
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<E> ExactSizeIterator for DoublyLinkedListIterator<'_, E> {}

/// Owning iterator over a [`DoublyLinkedList`], head to tail.
pub struct DoublyLinkedListIntoIterator<E> {
    list: DoublyLinkedList<E>,
}

impl<E> Iterator for DoublyLinkedListIntoIterator<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<E> DoubleEndedIterator for DoublyLinkedListIntoIterator<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last()
    }
}

impl<E> ExactSizeIterator for DoublyLinkedListIntoIterator<E> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Default for DoublyLinkedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for DoublyLinkedList<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        for element in iterable {
            self.add_last(element);
        }
    }
}

impl<E> FromIterator<E> for DoublyLinkedList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iterable: I) -> Self {
        let mut list = Self::new();
        list.extend(iterable);
        list
    }
}

impl<E> IntoIterator for DoublyLinkedList<E> {
    type Item = E;
    type IntoIter = DoublyLinkedListIntoIterator<E>;

    fn into_iter(self) -> Self::IntoIter {
        DoublyLinkedListIntoIterator { list: self }
    }
}

impl<'a, E> IntoIterator for &'a DoublyLinkedList<E> {
    type Item = &'a E;
    type IntoIter = DoublyLinkedListIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: PartialEq> PartialEq for DoublyLinkedList<E> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for DoublyLinkedList<E> {}

impl<E: fmt::Debug> fmt::Debug for DoublyLinkedList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for DoublyLinkedList<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for DoublyLinkedList<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for DoublyLinkedList<E>
where
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(crate::serde_support::SequenceVisitor::<Self, E>::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
