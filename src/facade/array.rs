//! Fixed-size array of optional slots.

use std::fmt;

use crate::error::CollectionResult;
use crate::sequential::DynamicArray;

/// A fixed-size array whose slots start empty.
///
/// The length is chosen at construction and never changes. Every index in
/// `[0, len)` is addressable; anything else is
/// [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange).
///
/// # Examples
///
/// ```rust
/// use coffer::{Array, CollectionError};
///
/// let mut months: Array<u32> = Array::new(12);
/// assert_eq!(months.len(), 12);
/// assert_eq!(months.get(3), Ok(None));
///
/// assert_eq!(months.set(3, 1_250), Ok(None));
/// assert_eq!(months.set(3, 1_400), Ok(Some(1_250)));
/// assert_eq!(months.get(3), Ok(Some(&1_400)));
///
/// assert_eq!(
///     months.get(12),
///     Err(CollectionError::OutOfRange { index: 12, len: 12 })
/// );
/// ```
pub struct Array<E> {
    slots: DynamicArray<Option<E>>,
}

impl<E> Array<E> {
    /// Creates an array of `size` empty slots.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            slots: (0..size).map(|_| None).collect(),
        }
    }

    /// Stores `value` at `index`, returning the value previously there.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange)
    /// when `index >= len`.
    pub fn set(&mut self, index: usize, value: E) -> CollectionResult<Option<E>> {
        self.slots.set(index, Some(value))
    }

    /// Returns the value at `index`, or `None` for an empty slot.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::OutOfRange`](crate::CollectionError::OutOfRange)
    /// when `index >= len`.
    pub fn get(&self, index: usize) -> CollectionResult<Option<&E>> {
        self.slots.get(index).map(Option::as_ref)
    }

    /// Returns the fixed number of slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the array has no slots at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<E: fmt::Debug> fmt::Debug for Array<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.slots.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectionError;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(16)]
    fn test_every_slot_starts_empty(#[case] size: usize) {
        let array: Array<String> = Array::new(size);
        assert_eq!(array.len(), size);
        for index in 0..size {
            assert_eq!(array.get(index), Ok(None));
        }
        assert_eq!(
            array.get(size),
            Err(CollectionError::OutOfRange { index: size, len: size })
        );
    }

    #[rstest]
    fn test_set_out_of_range_leaves_array_unchanged() {
        let mut array = Array::new(2);
        assert!(array.set(2, 'x').is_err());
        assert_eq!(array.len(), 2);
        assert_eq!(format!("{array:?}"), "[None, None]");
    }
}
