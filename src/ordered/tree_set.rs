//! Ordered set over [`BinarySearchTreeMap`].

use std::cmp::Ordering;
use std::fmt;

use super::tree_map::{BinarySearchTreeMap, BinarySearchTreeMapIterator};

/// A comparator-ordered set.
///
/// Elements are the keys of a [`BinarySearchTreeMap`] whose values are all the
/// unit sentinel `()`.
///
/// # Examples
///
/// ```rust
/// use coffer::TreeSet;
///
/// let mut categories = TreeSet::new(|a: &&str, b: &&str| a.cmp(b));
/// assert!(categories.add("travel"));
/// assert!(categories.add("food"));
/// assert!(!categories.add("travel"));
///
/// let sorted: Vec<&&str> = categories.iter().collect();
/// assert_eq!(sorted, vec![&"food", &"travel"]);
/// ```
pub struct TreeSet<E, C> {
    map: BinarySearchTreeMap<E, (), C>,
}

impl<E, C> TreeSet<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    /// Creates an empty set ordered by `comparator`.
    #[must_use]
    pub const fn new(comparator: C) -> Self {
        Self {
            map: BinarySearchTreeMap::new(comparator),
        }
    }

    /// Adds an element, returning `true` if it was not already present.
    pub fn add(&mut self, element: E) -> bool {
        self.map.put(element, ()).is_none()
    }

    /// Removes an element, returning `true` if it was present.
    pub fn remove(&mut self, element: &E) -> bool {
        self.map.remove(element).is_some()
    }

    /// Returns `true` if the set contains `element`.
    #[must_use]
    pub fn contains(&self, element: &E) -> bool {
        self.map.contains_key(element)
    }
}

impl<E, C> TreeSet<E, C> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the least element.
    #[must_use]
    pub fn first(&self) -> Option<&E> {
        self.map.first().map(|(element, ())| element)
    }

    /// Returns the greatest element.
    #[must_use]
    pub fn last(&self) -> Option<&E> {
        self.map.last().map(|(element, ())| element)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> TreeSetIterator<'_, E> {
        TreeSetIterator {
            entries: self.map.iter(),
        }
    }
}

/// Ascending iterator over a [`TreeSet`].
pub struct TreeSetIterator<'a, E> {
    entries: BinarySearchTreeMapIterator<'a, E, ()>,
}

impl<'a, E> Iterator for TreeSetIterator<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<E> ExactSizeIterator for TreeSetIterator<'_, E> {}

impl<E, C> Extend<E> for TreeSet<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        for element in iterable {
            self.add(element);
        }
    }
}

impl<'a, E, C> IntoIterator for &'a TreeSet<E, C> {
    type Item = &'a E;
    type IntoIter = TreeSetIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: PartialEq, C> PartialEq for TreeSet<E, C> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<E: fmt::Debug, C> fmt::Debug for TreeSet<E, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_remove_reports_presence() {
        let mut set = TreeSet::new(i32::cmp);
        set.extend([4, 2, 6]);
        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(&4));
        assert_eq!(set.last(), Some(&6));
    }

    #[rstest]
    fn test_debug_is_ascending() {
        let mut set = TreeSet::new(i32::cmp);
        set.extend([3, 1, 2]);
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }

    #[rstest]
    fn test_empty_set() {
        let set = TreeSet::new(i32::cmp);
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
        assert!(!set.contains(&0));
    }
}
