//! Hash map with chained collision resolution.
//!
//! This module provides [`ChainedHashMap`], a mutable hash table whose
//! buckets are singly linked chains of entries.
//!
//! # Overview
//!
//! - Average O(1) `get`, `put`, `remove`
//! - O(n) rehash when the table grows
//! - O(1) `len` and `is_empty`
//!
//! The bucket count is always a power of two. A key's bucket is found by
//! hashing it with the map's [`BuildHasher`], running the result through a
//! supplemental mixing function and masking off the low bits.
//!
//! # Growth
//!
//! The map keeps a *threshold* of `capacity * load_factor` entries. When an
//! insertion takes the entry count past the threshold, the bucket array
//! doubles and every entry is relinked into it using its cached hash. This is
//! a single O(n) pause inside an otherwise O(1) `put`; callers sensitive to
//! that pause should size the map up front with
//! [`with_capacity`](ChainedHashMap::with_capacity).
//!
//! # Examples
//!
//! ```rust
//! use coffer::ChainedHashMap;
//!
//! let mut accounts = ChainedHashMap::new();
//! accounts.put("ACC001".to_string(), 1_000);
//! accounts.put("ACC002".to_string(), 250);
//!
//! assert_eq!(accounts.get("ACC001"), Some(&1_000));
//! assert_eq!(accounts.put("ACC001".to_string(), 1_500), Some(1_000));
//! assert_eq!(accounts.remove("ACC002"), Some(250));
//! assert_eq!(accounts.len(), 1);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::Index;

use crate::error::{CollectionError, CollectionResult};
use crate::hashing::{DefaultHashBuilder, bucket_index, hash_key};

// =============================================================================
// Constants
// =============================================================================

/// Bucket count used by [`ChainedHashMap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Load factor used when none is supplied.
pub const DEFAULT_LOAD_FACTOR: f32 = 0.75;

/// Largest bucket count the table will grow to.
pub const MAXIMUM_CAPACITY: usize = 1 << 30;

// =============================================================================
// Entry Definition
// =============================================================================

type Link<K, V> = Option<Box<Entry<K, V>>>;

/// A key-value pair in a bucket chain.
struct Entry<K, V> {
    /// Mixed hash of `key`, cached so rehashing never touches the key.
    hash: u64,
    key: K,
    value: V,
    next: Link<K, V>,
}

fn allocate_buckets<K, V>(capacity: usize) -> Box<[Link<K, V>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// Drops a chain one entry at a time.
fn unlink_chain<K, V>(mut link: Link<K, V>) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}

/// Copies a chain, preserving entry order, without recursing.
fn clone_chain<K: Clone, V: Clone>(link: &Link<K, V>) -> Link<K, V> {
    let mut entries = Vec::new();
    let mut cursor = link.as_deref();
    while let Some(entry) = cursor {
        entries.push(entry);
        cursor = entry.next.as_deref();
    }
    entries.into_iter().rev().fold(None, |next, entry| {
        Some(Box::new(Entry {
            hash: entry.hash,
            key: entry.key.clone(),
            value: entry.value.clone(),
            next,
        }))
    })
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn threshold_for(capacity: usize, load_factor: f32) -> usize {
    (capacity as f64 * f64::from(load_factor)) as usize
}

// =============================================================================
// ChainedHashMap Definition
// =============================================================================

/// A hash map resolving collisions with per-bucket linked chains.
///
/// # Time Complexity
///
/// | Operation      | Complexity                   |
/// |----------------|------------------------------|
/// | `get`          | O(1) average                 |
/// | `put`          | O(1) average, O(n) on resize |
/// | `remove`       | O(1) average                 |
/// | `contains_key` | O(1) average                 |
/// | `len`          | O(1)                         |
///
/// # Absent Keys
///
/// There is no null key. A map that must store a value for "no key" uses
/// `Option<K>` as its key type; `None` is then an ordinary key.
///
/// ```rust
/// use coffer::ChainedHashMap;
///
/// let mut map: ChainedHashMap<Option<&str>, i32> = ChainedHashMap::new();
/// map.put(None, 0);
/// map.put(Some("a"), 1);
/// assert_eq!(map.get(&None), Some(&0));
/// ```
pub struct ChainedHashMap<K, V, S = DefaultHashBuilder> {
    buckets: Box<[Link<K, V>]>,
    length: usize,
    /// Entry count above which the table doubles.
    threshold: usize,
    load_factor: f32,
    hash_builder: S,
}

impl<K, V> ChainedHashMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map with 16 buckets and a load factor of 0.75.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<String, i32> = ChainedHashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::build(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, DefaultHashBuilder::default())
    }

    /// Creates an empty map with at least `capacity` buckets.
    ///
    /// The bucket count is rounded up to a power of two and clamped to
    /// [`MAXIMUM_CAPACITY`].
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] when `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::ChainedHashMap;
    ///
    /// let map: ChainedHashMap<u32, u32> = ChainedHashMap::with_capacity(100).unwrap();
    /// assert_eq!(map.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> CollectionResult<Self> {
        Self::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates an empty map with the given bucket count and load factor.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`] when `capacity` is zero and
    /// [`CollectionError::InvalidLoadFactor`] when `load_factor` is not
    /// strictly positive.
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f32,
    ) -> CollectionResult<Self> {
        Self::with_capacity_and_hasher(capacity, load_factor, DefaultHashBuilder::default())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    ///
    /// # Errors
    ///
    /// Same as [`with_capacity_and_load_factor`](ChainedHashMap::with_capacity_and_load_factor).
    pub fn with_capacity_and_hasher(
        capacity: usize,
        load_factor: f32,
        hash_builder: S,
    ) -> CollectionResult<Self> {
        if capacity == 0 {
            return Err(CollectionError::InvalidCapacity { capacity });
        }
        if load_factor.is_nan() || load_factor <= 0.0 {
            return Err(CollectionError::InvalidLoadFactor { load_factor });
        }
        Ok(Self::build(
            capacity.min(MAXIMUM_CAPACITY).next_power_of_two(),
            load_factor,
            hash_builder,
        ))
    }

    fn build(capacity: usize, load_factor: f32, hash_builder: S) -> Self {
        Self {
            buckets: allocate_buckets(capacity),
            length: 0,
            threshold: threshold_for(capacity, load_factor),
            load_factor,
            hash_builder,
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the current number of buckets (always a power of two).
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the load factor the map was created with.
    #[inline]
    #[must_use]
    pub const fn load_factor(&self) -> f32 {
        self.load_factor
    }

    /// Returns the map's hash builder.
    #[must_use]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry, keeping the bucket array.
    ///
    /// Chains are unlinked iteratively, so arbitrarily long chains are safe
    /// to clear.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            unlink_chain(bucket.take());
        }
        self.length = 0;
    }

    /// Returns an iterator over the entries in bucket order.
    pub fn iter(&self) -> ChainedHashMapIterator<'_, K, V> {
        ChainedHashMapIterator {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.length,
        }
    }

    /// Returns an iterator yielding each key with a mutable value reference.
    pub fn iter_mut(&mut self) -> ChainedHashMapIterMut<'_, K, V> {
        ChainedHashMapIterMut {
            buckets: self.buckets.iter_mut(),
            current: None,
            remaining: self.length,
        }
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.iter_mut().map(|(_, value)| value)
    }

    /// Relinks every entry into a table of `new_capacity` buckets.
    fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.buckets.len();
        if old_capacity >= MAXIMUM_CAPACITY {
            self.threshold = usize::MAX;
            return;
        }
        tracing::debug!(
            old_capacity,
            new_capacity,
            entries = self.length,
            "rehashing chained hash map"
        );

        let old_buckets = std::mem::replace(&mut self.buckets, allocate_buckets(new_capacity));
        for mut link in old_buckets.into_vec() {
            while let Some(mut entry) = link {
                link = entry.next.take();
                let index = bucket_index(entry.hash, new_capacity);
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
            }
        }
        self.threshold = threshold_for(new_capacity, self.load_factor);
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = hash_key(&self.hash_builder, key);
        let mut cursor = self.buckets[bucket_index(hash, self.buckets.len())].as_deref();
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key.borrow() == key {
                return Some(entry);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = hash_key(&self.hash_builder, key);
        let index = bucket_index(hash, self.buckets.len());
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key.borrow() == key {
                return Some(entry);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// The key may be any borrowed form of the map's key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.put("groceries".to_string(), 42);
    /// assert_eq!(map.get("groceries"), Some(&42));
    /// assert_eq!(map.get("rent"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns `true` if the map holds an entry for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Associates `value` with `key`, returning the value it replaced.
    ///
    /// An existing entry is updated in place; a new key is linked at the head
    /// of its bucket chain. If the new entry takes the map past its threshold
    /// the table doubles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::with_capacity(16).unwrap();
    /// assert_eq!(map.put("a", 1), None);
    /// assert_eq!(map.put("b", 2), None);
    /// assert_eq!(map.put("a", 3), Some(1));
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("a"), Some(&3));
    /// assert_eq!(map.get("b"), Some(&2));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = hash_key(&self.hash_builder, &key);
        let index = bucket_index(hash, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key == key {
                return Some(std::mem::replace(&mut entry.value, value));
            }
            cursor = entry.next.as_deref_mut();
        }

        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Entry {
            hash,
            key,
            value,
            next,
        }));
        self.length += 1;
        if self.length > self.threshold {
            self.resize(self.buckets.len() * 2);
        }
        None
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::ChainedHashMap;
    ///
    /// let mut map = ChainedHashMap::new();
    /// map.put(7, "seven");
    /// assert_eq!(map.remove(&7), Some("seven"));
    /// assert_eq!(map.remove(&7), None);
    /// assert_eq!(map.get(&7), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = hash_key(&self.hash_builder, key);
        let index = bucket_index(hash, self.buckets.len());

        let mut link = &mut self.buckets[index];
        while link
            .as_ref()
            .is_some_and(|entry| !(entry.hash == hash && entry.key.borrow() == key))
        {
            link = &mut link.as_mut()?.next;
        }
        let removed = link.take()?;
        let Entry { value, next, .. } = *removed;
        *link = next;
        self.length -= 1;
        Some(value)
    }

    /// Grows the table, if needed, so that `additional` more entries fit
    /// without crossing the threshold.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.length.saturating_add(additional);
        if required <= self.threshold {
            return;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let target = ((required as f64 / f64::from(self.load_factor)) as usize)
            .saturating_add(1)
            .min(MAXIMUM_CAPACITY)
            .next_power_of_two();
        if target > self.buckets.len() {
            self.resize(target);
        }
    }

    /// Copies every entry of `iterable` into the map, growing at most once up
    /// front when the incoming size is known.
    pub fn put_all<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let iterator = iterable.into_iter();
        let (lower, _) = iterator.size_hint();
        if lower > self.threshold {
            self.reserve(lower);
        }
        for (key, value) in iterator {
            self.put(key, value);
        }
    }
}

impl<K, V: PartialEq, S> ChainedHashMap<K, V, S> {
    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// This scans every bucket.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.values().any(|candidate| candidate == value)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`ChainedHashMap`].
pub struct ChainedHashMapIterator<'a, K, V> {
    buckets: std::slice::Iter<'a, Link<K, V>>,
    current: Option<&'a Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for ChainedHashMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for ChainedHashMapIterator<'_, K, V> {}

/// Iterator over a [`ChainedHashMap`] yielding mutable value references.
pub struct ChainedHashMapIterMut<'a, K, V> {
    buckets: std::slice::IterMut<'a, Link<K, V>>,
    current: Option<&'a mut Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for ChainedHashMapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.take() {
                let Entry {
                    key, value, next, ..
                } = entry;
                self.current = next.as_deref_mut();
                self.remaining -= 1;
                return Some((&*key, value));
            }
            self.current = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for ChainedHashMapIterMut<'_, K, V> {}

/// Owning iterator over a [`ChainedHashMap`].
pub struct ChainedHashMapIntoIterator<K, V> {
    buckets: std::vec::IntoIter<Link<K, V>>,
    current: Link<K, V>,
    remaining: usize,
}

impl<K, V> Iterator for ChainedHashMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut entry) = self.current.take() {
                self.current = entry.next.take();
                self.remaining -= 1;
                let Entry { key, value, .. } = *entry;
                return Some((key, value));
            }
            self.current = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for ChainedHashMapIntoIterator<K, V> {}

impl<K, V> Drop for ChainedHashMapIntoIterator<K, V> {
    fn drop(&mut self) {
        unlink_chain(self.current.take());
        for bucket in self.buckets.by_ref() {
            unlink_chain(bucket);
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Clone, V: Clone, S: Clone> Clone for ChainedHashMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.iter().map(clone_chain).collect(),
            length: self.length,
            threshold: self.threshold,
            load_factor: self.load_factor,
            hash_builder: self.hash_builder.clone(),
        }
    }
}

impl<K, V, S> Drop for ChainedHashMap<K, V, S> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V, S: Default> Default for ChainedHashMap<K, V, S> {
    fn default() -> Self {
        Self::build(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR, S::default())
    }
}

impl<K, V, S> Extend<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        self.put_all(iterable);
    }
}

impl<K, V, S> FromIterator<(K, V)> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut map = Self::default();
        map.put_all(iterable);
        map
    }
}

impl<K, V, S> IntoIterator for ChainedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = ChainedHashMapIntoIterator<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        ChainedHashMapIntoIterator {
            buckets: std::mem::take(&mut self.buckets).into_vec().into_iter(),
            current: None,
            remaining: std::mem::take(&mut self.length),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = ChainedHashMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, Q, V, S> Index<&Q> for ChainedHashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in ChainedHashMap"),
        }
    }
}

impl<K, V, S> PartialEq for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S> Eq for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for ChainedHashMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for ChainedHashMap<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(crate::serde_support::MapVisitor::<Self, K, V>::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
