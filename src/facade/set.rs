//! Reduced-surface set facade.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use crate::hashed::HashSet;

/// A minimal set backed by a [`HashSet`].
///
/// # Examples
///
/// ```rust
/// use coffer::Set;
///
/// let mut seen = Set::new();
/// seen.add(7);
/// seen.add(7);
/// assert_eq!(seen.len(), 1);
/// assert!(seen.contains(&7));
/// seen.remove(&7);
/// assert!(seen.is_empty());
/// ```
pub struct Set<E> {
    inner: HashSet<E>,
}

impl<E> Set<E> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<E: Hash + Eq> Set<E> {
    /// Adds `element`; adding a present element has no effect.
    pub fn add(&mut self, element: E) {
        self.inner.add(element);
    }

    /// Removes `element` if present.
    pub fn remove<Q>(&mut self, element: &Q)
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element);
    }

    /// Returns `true` if `element` is present.
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }
}

impl<E> Default for Set<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, formatter)
    }
}
