//! Reduced-surface map facade.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use crate::hashed::ChainedHashMap;

/// A minimal key-value map backed by a [`ChainedHashMap`].
///
/// Exposes only storing, lookup and removal; use [`ChainedHashMap`] directly
/// for iteration or capacity control.
///
/// # Examples
///
/// ```rust
/// use coffer::Map;
///
/// let mut budgets = Map::new();
/// budgets.put("food", 300);
/// budgets.put("food", 350);
///
/// assert_eq!(budgets.get("food"), Some(&350));
/// assert!(budgets.remove("food"));
/// assert!(!budgets.remove("food"));
/// assert!(budgets.is_empty());
/// ```
pub struct Map<K, V> {
    inner: ChainedHashMap<K, V>,
}

impl<K, V> Map<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ChainedHashMap::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Hash + Eq, V> Map<K, V> {
    /// Stores `value` under `key`, replacing any previous value.
    pub fn put(&mut self, key: K, value: V) {
        self.inner.put(key, value);
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Removes `key`, returning `true` if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key).is_some()
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, formatter)
    }
}
