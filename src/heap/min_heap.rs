//! Array-backed binary min-heap.
//!
//! This module provides [`BinaryMinHeap`], a heap ordered solely by a
//! comparator supplied at construction.
//!
//! # Internal Structure
//!
//! The elements live in a [`DynamicArray`] read as a complete binary tree:
//! the children of index `i` sit at `2i + 1` and `2i + 2`. No element is
//! ordered strictly before its parent, so the root is always a minimum.
//!
//! - `add` appends and sifts the new element up while it is strictly less
//!   than its parent.
//! - `poll` swaps the root with the last element, removes it and sifts the new
//!   root down toward the smaller child.
//!
//! Equal elements may come out in any order; the heap is not stable.
//!
//! # Examples
//!
//! ```rust
//! use coffer::BinaryMinHeap;
//!
//! let mut heap = BinaryMinHeap::new(i32::cmp);
//! for value in [5, 1, 8, 1, 3] {
//!     heap.add(value);
//! }
//!
//! let polled: Vec<i32> = std::iter::from_fn(|| heap.poll()).collect();
//! assert_eq!(polled, vec![1, 1, 3, 5, 8]);
//! assert_eq!(heap.poll(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::CollectionResult;
use crate::sequential::{DynamicArray, DynamicArrayIterator};

/// A binary min-heap ordered by a caller-supplied comparator.
///
/// The comparator is fixed for the lifetime of the heap and every ordering
/// decision goes through it.
///
/// # Time Complexity
///
/// | Operation | Complexity         |
/// |-----------|--------------------|
/// | `add`     | O(log n) amortized |
/// | `poll`    | O(log n)           |
/// | `peek`    | O(1)               |
/// | `len`     | O(1)               |
#[derive(Clone)]
pub struct BinaryMinHeap<E, C> {
    elements: DynamicArray<E>,
    comparator: C,
}

impl<E, C> BinaryMinHeap<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    /// Creates an empty heap ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::BinaryMinHeap;
    ///
    /// // A max-heap is a min-heap with a reversed comparator.
    /// let mut heap = BinaryMinHeap::new(|a: &i32, b: &i32| b.cmp(a));
    /// heap.add(1);
    /// heap.add(9);
    /// assert_eq!(heap.peek(), Some(&9));
    /// ```
    #[must_use]
    pub fn new(comparator: C) -> Self {
        Self {
            elements: DynamicArray::new(),
            comparator,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`](crate::CollectionError::InvalidCapacity)
    /// when `capacity` is zero.
    pub fn with_capacity(capacity: usize, comparator: C) -> CollectionResult<Self> {
        Ok(Self {
            elements: DynamicArray::with_capacity(capacity)?,
            comparator,
        })
    }

    /// Adds an element to the heap.
    pub fn add(&mut self, element: E) {
        self.elements.append(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns a minimum element, or `None` if the heap is empty.
    pub fn poll(&mut self) -> Option<E> {
        let last = self.elements.len().checked_sub(1)?;
        self.elements.swap_within(0, last);
        let minimum = self.elements.pop();
        self.sift_down(0);
        minimum
    }

    /// Returns a minimum element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&E> {
        self.elements.first()
    }

    /// Removes the first element (in storage order) matching `predicate`.
    ///
    /// The vacated position is filled with the last element, which is then
    /// sifted in whichever direction restores the heap property. This supports
    /// re-prioritising an element: remove it, update it, add it back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::BinaryMinHeap;
    ///
    /// let mut heap = BinaryMinHeap::new(i32::cmp);
    /// heap.extend([4, 2, 7, 1]);
    /// assert_eq!(heap.remove_first_match(|value| *value == 2), Some(2));
    /// assert_eq!(heap.poll(), Some(1));
    /// assert_eq!(heap.poll(), Some(4));
    /// ```
    pub fn remove_first_match<P>(&mut self, predicate: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        let index = self.elements.iter().position(predicate)?;
        let last = self.elements.len() - 1;
        self.elements.swap_within(index, last);
        let removed = self.elements.pop();
        if index < self.elements.len() {
            let settled = self.sift_down(index);
            self.sift_up(settled);
        }
        removed
    }

    /// Returns `true` if the element at `first` is ordered strictly before the
    /// element at `second`.
    fn precedes(&self, first: usize, second: usize) -> bool {
        match (self.elements.get(first), self.elements.get(second)) {
            (Ok(left), Ok(right)) => (self.comparator)(left, right) == Ordering::Less,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.elements.swap_within(index, parent);
            index = parent;
        }
    }

    /// Sifts the element at `index` down and returns where it came to rest.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let length = self.elements.len();
        loop {
            let left = 2 * index + 1;
            if left >= length {
                break;
            }
            let right = left + 1;
            let smallest = if right < length && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(smallest, index) {
                break;
            }
            self.elements.swap_within(index, smallest);
            index = smallest;
        }
        index
    }
}

impl<E, C> BinaryMinHeap<E, C> {
    /// Returns the number of elements in the heap.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator over the elements in storage (not sorted) order.
    pub fn iter(&self) -> DynamicArrayIterator<'_, E> {
        self.elements.iter()
    }

    /// Returns the comparator.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<E, C> BinaryMinHeap<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    /// Drains the heap into a `Vec` in ascending comparator order.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(element) = self.poll() {
            sorted.push(element);
        }
        sorted
    }
}

impl<E, C> Extend<E> for BinaryMinHeap<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        for element in iterable {
            self.add(element);
        }
    }
}

impl<E: fmt::Debug, C> fmt::Debug for BinaryMinHeap<E, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BinaryMinHeap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
