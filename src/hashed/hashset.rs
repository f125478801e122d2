//! Hash set built on [`ChainedHashMap`].
//!
//! [`HashSet`] stores its elements as the keys of a [`ChainedHashMap`] whose
//! values are all the unit sentinel `()`. It inherits the map's bucket layout,
//! growth policy and hasher selection.
//!
//! # Examples
//!
//! ```rust
//! use coffer::HashSet;
//!
//! let mut vendors = HashSet::new();
//! assert!(vendors.add("grocer"));
//! assert!(!vendors.add("grocer")); // already present
//! assert!(vendors.contains("grocer"));
//! assert!(vendors.remove("grocer"));
//! assert!(vendors.is_empty());
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use super::chained_hashmap::{ChainedHashMap, ChainedHashMapIntoIterator, ChainedHashMapIterator};
use crate::error::CollectionResult;
use crate::hashing::DefaultHashBuilder;

/// A hash set backed by a [`ChainedHashMap`] with a unit sentinel value.
#[derive(Clone)]
pub struct HashSet<E, S = DefaultHashBuilder> {
    map: ChainedHashMap<E, (), S>,
}

impl<E> HashSet<E, DefaultHashBuilder> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: ChainedHashMap::new(),
        }
    }

    /// Creates an empty set with room for `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`](crate::CollectionError::InvalidCapacity)
    /// when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> CollectionResult<Self> {
        ChainedHashMap::with_capacity(capacity).map(|map| Self { map })
    }

    /// Creates an empty set with the given bucket count and load factor.
    ///
    /// # Errors
    ///
    /// See [`ChainedHashMap::with_capacity_and_load_factor`].
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f32,
    ) -> CollectionResult<Self> {
        ChainedHashMap::with_capacity_and_load_factor(capacity, load_factor)
            .map(|map| Self { map })
    }
}

impl<E, S> HashSet<E, S> {
    /// Creates an empty set that hashes elements with `hash_builder`.
    ///
    /// # Errors
    ///
    /// See [`ChainedHashMap::with_capacity_and_hasher`].
    pub fn with_capacity_and_hasher(
        capacity: usize,
        load_factor: f32,
        hash_builder: S,
    ) -> CollectionResult<Self> {
        ChainedHashMap::with_capacity_and_hasher(capacity, load_factor, hash_builder)
            .map(|map| Self { map })
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns an iterator over the elements in bucket order.
    pub fn iter(&self) -> HashSetIterator<'_, E> {
        HashSetIterator {
            entries: self.map.iter(),
        }
    }
}

impl<E, S> HashSet<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    /// Adds an element, returning `true` if it was not already present.
    pub fn add(&mut self, element: E) -> bool {
        self.map.put(element, ()).is_none()
    }

    /// Removes an element, returning `true` if it was present.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(element).is_some()
    }

    /// Returns `true` if the set contains `element`.
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(element)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`HashSet`].
pub struct HashSetIterator<'a, E> {
    entries: ChainedHashMapIterator<'a, E, ()>,
}

impl<'a, E> Iterator for HashSetIterator<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<E> ExactSizeIterator for HashSetIterator<'_, E> {}

/// Owning iterator over a [`HashSet`].
pub struct HashSetIntoIterator<E> {
    entries: ChainedHashMapIntoIterator<E, ()>,
}

impl<E> Iterator for HashSetIntoIterator<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(element, ())| element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<E> ExactSizeIterator for HashSetIntoIterator<E> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E, S: Default> Default for HashSet<E, S> {
    fn default() -> Self {
        Self {
            map: ChainedHashMap::default(),
        }
    }
}

impl<E, S> Extend<E> for HashSet<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        self.map
            .put_all(iterable.into_iter().map(|element| (element, ())));
    }
}

impl<E, S> FromIterator<E> for HashSet<E, S>
where
    E: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(iterable: I) -> Self {
        let mut set = Self::default();
        set.extend(iterable);
        set
    }
}

impl<E, S> IntoIterator for HashSet<E, S> {
    type Item = E;
    type IntoIter = HashSetIntoIterator<E>;

    fn into_iter(self) -> Self::IntoIter {
        HashSetIntoIterator {
            entries: self.map.into_iter(),
        }
    }
}

impl<'a, E, S> IntoIterator for &'a HashSet<E, S> {
    type Item = &'a E;
    type IntoIter = HashSetIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, S> PartialEq for HashSet<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<E, S> Eq for HashSet<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
}

impl<E: fmt::Debug, S> fmt::Debug for HashSet<E, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl<E: serde::Serialize, S> serde::Serialize for HashSet<E, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E, S> serde::Deserialize<'de> for HashSet<E, S>
where
    E: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(crate::serde_support::SequenceVisitor::<Self, E>::new())
    }
}
