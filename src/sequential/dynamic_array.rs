//! Growable contiguous array.
//!
//! This module provides [`DynamicArray`], an index-addressable sequence that
//! stores its elements in a single contiguous buffer and grows that buffer
//! geometrically when it fills up.
//!
//! # Overview
//!
//! - O(1) `get`, `set` and `len`
//! - Amortized O(1) `append`
//! - O(n) `insert_at` and `remove_at` (trailing elements are shifted)
//!
//! Capacity never shrinks: removing elements leaves the buffer at its
//! high-water mark.
//!
//! # Examples
//!
//! ```rust
//! use coffer::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.append("checking");
//! array.append("savings");
//! array.insert_at(1, "brokerage").unwrap();
//!
//! assert_eq!(array.get(1), Ok(&"brokerage"));
//! assert_eq!(array.remove_at(0), Ok("checking"));
//! assert_eq!(array.len(), 2);
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut, Range};

use crate::error::{CollectionError, CollectionResult};

// =============================================================================
// Constants
// =============================================================================

/// Capacity used by [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

// =============================================================================
// DynamicArray Definition
// =============================================================================

/// A growable array backed by one contiguous buffer.
///
/// Slots past `len` are always empty, so an element removed from the array is
/// dropped immediately rather than lingering in the vacated slot.
///
/// # Time Complexity
///
/// | Operation   | Complexity     |
/// |-------------|----------------|
/// | `get`       | O(1)           |
/// | `set`       | O(1)           |
/// | `append`    | amortized O(1) |
/// | `insert_at` | O(n)           |
/// | `remove_at` | O(n)           |
/// | `len`       | O(1)           |
#[derive(Clone)]
pub struct DynamicArray<E> {
    /// Backing storage; `buffer[..length]` is fully occupied.
    buffer: Box<[Option<E>]>,
    /// Number of occupied slots.
    length: usize,
}

/// Allocates a buffer of `capacity` empty slots.
fn allocate<E>(capacity: usize) -> Box<[Option<E>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<E> DynamicArray<E> {
    /// Creates an empty array with the default capacity of ten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let array: DynamicArray<i32> = DynamicArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 10);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: allocate(DEFAULT_CAPACITY),
            length: 0,
        }
    }

    /// Creates an empty array able to hold `capacity` elements before growing.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] when `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::{CollectionError, DynamicArray};
    ///
    /// let array: DynamicArray<u8> = DynamicArray::with_capacity(64).unwrap();
    /// assert_eq!(array.capacity(), 64);
    ///
    /// assert_eq!(
    ///     DynamicArray::<u8>::with_capacity(0).err(),
    ///     Some(CollectionError::InvalidCapacity { capacity: 0 })
    /// );
    /// ```
    pub fn with_capacity(capacity: usize) -> CollectionResult<Self> {
        if capacity == 0 {
            return Err(CollectionError::InvalidCapacity { capacity });
        }
        Ok(Self {
            buffer: allocate(capacity),
            length: 0,
        })
    }

    /// Returns the number of elements in the array.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.len()
    }

    const fn out_of_range(&self, index: usize) -> CollectionError {
        CollectionError::OutOfRange {
            index,
            len: self.length,
        }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let array: DynamicArray<i32> = (1..=3).collect();
    /// assert_eq!(array.get(2), Ok(&3));
    /// assert!(array.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> CollectionResult<&E> {
        if index >= self.length {
            return Err(self.out_of_range(index));
        }
        self.buffer[index]
            .as_ref()
            .ok_or(CollectionError::OutOfRange {
                index,
                len: self.length,
            })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> CollectionResult<&mut E> {
        let error = self.out_of_range(index);
        if index >= self.length {
            return Err(error);
        }
        self.buffer[index].as_mut().ok_or(error)
    }

    /// Replaces the element at `index`, returning the previous element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`. The
    /// array is left unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = (1..=3).collect();
    /// assert_eq!(array.set(0, 10), Ok(1));
    /// assert_eq!(array.get(0), Ok(&10));
    /// ```
    pub fn set(&mut self, index: usize, value: E) -> CollectionResult<E> {
        let error = self.out_of_range(index);
        if index >= self.length {
            return Err(error);
        }
        self.buffer[index].replace(value).ok_or(error)
    }

    /// Appends an element to the end of the array, growing the buffer if it
    /// is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let mut array = DynamicArray::with_capacity(1).unwrap();
    /// array.append(1);
    /// array.append(2);
    /// assert_eq!(array.len(), 2);
    /// assert!(array.capacity() >= 2);
    /// ```
    pub fn append(&mut self, value: E) {
        self.ensure_capacity(self.length + 1);
        self.buffer[self.length] = Some(value);
        self.length += 1;
    }

    /// Inserts an element at `index`, shifting later elements one slot right.
    ///
    /// `index == len()` is valid and behaves like [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = vec![1, 3].into_iter().collect();
    /// array.insert_at(1, 2).unwrap();
    /// array.insert_at(3, 4).unwrap();
    /// assert_eq!(array.to_vec(), vec![1, 2, 3, 4]);
    /// assert!(array.insert_at(6, 0).is_err());
    /// ```
    pub fn insert_at(&mut self, index: usize, value: E) -> CollectionResult<()> {
        if index > self.length {
            return Err(self.out_of_range(index));
        }
        self.ensure_capacity(self.length + 1);
        self.buffer[self.length] = Some(value);
        self.buffer[index..=self.length].rotate_right(1);
        self.length += 1;
        Ok(())
    }

    /// Inserts every element of `iterable` starting at `index`, keeping their
    /// iteration order and shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index > len()`; the array
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = vec![1, 5].into_iter().collect();
    /// array.insert_all_at(1, [2, 3, 4]).unwrap();
    /// assert_eq!(array.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(array.insert_all_at(9, [0]).is_err());
    /// ```
    pub fn insert_all_at<I>(&mut self, index: usize, iterable: I) -> CollectionResult<()>
    where
        I: IntoIterator<Item = E>,
    {
        if index > self.length {
            return Err(self.out_of_range(index));
        }
        let start = self.length;
        for value in iterable {
            self.append(value);
        }
        let inserted = self.length - start;
        self.buffer[index..self.length].rotate_right(inserted);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements one
    /// slot left.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> CollectionResult<E> {
        let error = self.out_of_range(index);
        if index >= self.length {
            return Err(error);
        }
        let removed = self.buffer[index].take();
        // The emptied slot travels to the end of the occupied region.
        self.buffer[index..self.length].rotate_left(1);
        self.length -= 1;
        removed.ok_or(error)
    }

    /// Removes and returns the last element, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<E> {
        if self.length == 0 {
            return None;
        }
        self.length -= 1;
        self.buffer[self.length].take()
    }

    /// Swaps the elements at positions `first` and `second`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when either index is
    /// `>= len()`.
    pub fn swap(&mut self, first: usize, second: usize) -> CollectionResult<()> {
        if first >= self.length {
            return Err(self.out_of_range(first));
        }
        if second >= self.length {
            return Err(self.out_of_range(second));
        }
        self.buffer.swap(first, second);
        Ok(())
    }

    /// Swaps two occupied slots without reporting an error.
    ///
    /// Callers guarantee both indices are `< len()`; anything else panics.
    pub(crate) fn swap_within(&mut self, first: usize, second: usize) {
        self.buffer[..self.length].swap(first, second);
    }

    /// Returns the first element, or `None` if the array is empty.
    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.buffer[..self.length].first().and_then(Option::as_ref)
    }

    /// Returns the last element, or `None` if the array is empty.
    #[must_use]
    pub fn last(&self) -> Option<&E> {
        self.buffer[..self.length].last().and_then(Option::as_ref)
    }

    /// Removes every element, keeping the allocated buffer.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer[..self.length] {
            *slot = None;
        }
        self.length = 0;
    }

    /// Keeps only the elements for which `predicate` returns `true`,
    /// preserving their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = (1..=6).collect();
    /// array.retain(|value| value % 2 == 0);
    /// assert_eq!(array.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&E) -> bool,
    {
        let mut write = 0;
        for read in 0..self.length {
            if let Some(element) = self.buffer[read].take()
                && predicate(&element)
            {
                self.buffer[write] = Some(element);
                write += 1;
            }
        }
        self.length = write;
    }

    /// Returns an iterator over the elements in index order.
    pub fn iter(&self) -> DynamicArrayIterator<'_, E> {
        DynamicArrayIterator {
            slots: self.buffer[..self.length].iter(),
        }
    }

    /// Returns an iterator over the elements in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`] when `range.end > len()` or
    /// `range.start > range.end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let array: DynamicArray<i32> = (1..=5).collect();
    /// let middle: Vec<&i32> = array.range(1..4).unwrap().collect();
    /// assert_eq!(middle, vec![&2, &3, &4]);
    /// assert_eq!(array.range(5..5).unwrap().len(), 0);
    /// assert!(array.range(2..6).is_err());
    /// ```
    pub fn range(&self, range: Range<usize>) -> CollectionResult<DynamicArrayIterator<'_, E>> {
        if range.end > self.length {
            return Err(self.out_of_range(range.end));
        }
        if range.start > range.end {
            return Err(self.out_of_range(range.start));
        }
        Ok(DynamicArrayIterator {
            slots: self.buffer[range].iter(),
        })
    }

    /// Returns an iterator yielding mutable references in index order.
    pub fn iter_mut(&mut self) -> DynamicArrayIterMut<'_, E> {
        DynamicArrayIterMut {
            slots: self.buffer[..self.length].iter_mut(),
        }
    }

    /// Grows the buffer so that it holds at least `required` slots.
    ///
    /// The new capacity is `max(capacity * 2, required)`.
    fn ensure_capacity(&mut self, required: usize) {
        let old_capacity = self.buffer.len();
        if required <= old_capacity {
            return;
        }
        let new_capacity = old_capacity.saturating_mul(2).max(required);
        tracing::trace!(old_capacity, new_capacity, "growing dynamic array buffer");

        let mut grown = allocate(new_capacity);
        for (target, source) in grown.iter_mut().zip(self.buffer[..self.length].iter_mut()) {
            *target = source.take();
        }
        self.buffer = grown;
    }
}

impl<E: PartialEq> DynamicArray<E> {
    /// Returns `true` if the array contains an element equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &E) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns the index of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &E) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Returns the index of the last element equal to `value`.
    #[must_use]
    pub fn last_index_of(&self, value: &E) -> Option<usize> {
        self.iter().rposition(|element| element == value)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = vec![1, 2, 1].into_iter().collect();
    /// assert_eq!(array.remove_item(&1), Some(1));
    /// assert_eq!(array.to_vec(), vec![2, 1]);
    /// assert_eq!(array.remove_item(&7), None);
    /// ```
    pub fn remove_item(&mut self, value: &E) -> Option<E> {
        let index = self.index_of(value)?;
        self.remove_at(index).ok()
    }

    /// Returns `true` if every element of `values` is present.
    ///
    /// An empty `values` is trivially contained.
    #[must_use]
    pub fn contains_all(&self, values: &[E]) -> bool {
        values.iter().all(|value| self.contains(value))
    }

    /// Removes every element equal to any of `values`, returning `true` if
    /// the array changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::DynamicArray;
    ///
    /// let mut array: DynamicArray<i32> = vec![1, 2, 3, 2, 1].into_iter().collect();
    /// assert!(array.remove_all(&[2, 9]));
    /// assert_eq!(array.to_vec(), vec![1, 3, 1]);
    /// assert!(!array.remove_all(&[9]));
    /// ```
    pub fn remove_all(&mut self, values: &[E]) -> bool {
        let before = self.length;
        self.retain(|element| !values.contains(element));
        self.length != before
    }
}

impl<E: Clone> DynamicArray<E> {
    /// Copies the elements into a `Vec` in index order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<E> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`DynamicArray`].
pub struct DynamicArrayIterator<'a, E> {
    slots: std::slice::Iter<'a, Option<E>>,
}

impl<'a, E> Iterator for DynamicArrayIterator<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> DoubleEndedIterator for DynamicArrayIterator<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<E> ExactSizeIterator for DynamicArrayIterator<'_, E> {}

/// Mutable borrowing iterator over a [`DynamicArray`].
pub struct DynamicArrayIterMut<'a, E> {
    slots: std::slice::IterMut<'a, Option<E>>,
}

impl<'a, E> Iterator for DynamicArrayIterMut<'a, E> {
    type Item = &'a mut E;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> ExactSizeIterator for DynamicArrayIterMut<'_, E> {}

/// Owning iterator over a [`DynamicArray`].
pub struct DynamicArrayIntoIterator<E> {
    slots: std::vec::IntoIter<Option<E>>,
}

impl<E> Iterator for DynamicArrayIntoIterator<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<E> DoubleEndedIterator for DynamicArrayIntoIterator<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().flatten()
    }
}

impl<E> ExactSizeIterator for DynamicArrayIntoIterator<E> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Default for DynamicArray<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Index<usize> for DynamicArray<E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<E> IndexMut<usize> for DynamicArray<E> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<E> Extend<E> for DynamicArray<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        let iterator = iterable.into_iter();
        let (lower, _) = iterator.size_hint();
        self.ensure_capacity(self.length + lower);
        for element in iterator {
            self.append(element);
        }
    }
}

impl<E> FromIterator<E> for DynamicArray<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iterable: I) -> Self {
        let mut array = Self::new();
        array.extend(iterable);
        array
    }
}

impl<E> IntoIterator for DynamicArray<E> {
    type Item = E;
    type IntoIter = DynamicArrayIntoIterator<E>;

    fn into_iter(self) -> Self::IntoIter {
        let mut slots = self.buffer.into_vec();
        slots.truncate(self.length);
        DynamicArrayIntoIterator {
            slots: slots.into_iter(),
        }
    }
}

impl<'a, E> IntoIterator for &'a DynamicArray<E> {
    type Item = &'a E;
    type IntoIter = DynamicArrayIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: PartialEq> PartialEq for DynamicArray<E> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for DynamicArray<E> {}

impl<E: fmt::Debug> fmt::Debug for DynamicArray<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<E: fmt::Display> fmt::Display for DynamicArray<E> {
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

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<E: serde::Serialize> serde::Serialize for DynamicArray<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E> serde::Deserialize<'de> for DynamicArray<E>
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_empty_array() {
        let array: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(format!("{array}"), "[]");
    }

    #[rstest]
    fn test_display_multiple_elements() {
        let array: DynamicArray<i32> = (1..=3).collect();
        assert_eq!(format!("{array}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_growth_at_least_doubles() {
        let mut array = DynamicArray::with_capacity(4).unwrap();
        for value in 0..5 {
            array.append(value);
        }
        assert_eq!(array.capacity(), 8);
    }

    #[rstest]
    fn test_growth_uses_required_size_when_larger() {
        let mut array = DynamicArray::with_capacity(2).unwrap();
        array.extend(0..9);
        assert_eq!(array.capacity(), 9);
        assert_eq!(array.to_vec(), (0..9).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_remove_at_clears_vacated_slot() {
        let mut array: DynamicArray<i32> = (0..4).collect();
        array.remove_at(1).unwrap();
        assert!(array.buffer[3].is_none());
        assert_eq!(array.to_vec(), vec![0, 2, 3]);
    }

    #[rstest]
    fn test_capacity_does_not_shrink() {
        let mut array: DynamicArray<i32> = (0..20).collect();
        let capacity = array.capacity();
        while array.pop().is_some() {}
        assert_eq!(array.capacity(), capacity);
    }

    #[rstest]
    fn test_retain_clears_trailing_slots() {
        let mut array: DynamicArray<i32> = (0..6).collect();
        array.retain(|value| *value < 2);
        assert!(array.buffer[2..].iter().all(Option::is_none));
    }

    #[rstest]
    #[should_panic(expected = "index 3 out of range for length 3")]
    fn test_index_out_of_range_panics() {
        let array: DynamicArray<i32> = (0..3).collect();
        let _ = array[3];
    }
}
