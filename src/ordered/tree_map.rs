//! Unbalanced binary search tree map.
//!
//! This module provides [`BinarySearchTreeMap`], an ordered map whose order is
//! defined entirely by a comparator supplied at construction.
//!
//! # Overview
//!
//! - O(h) `put`, `get`, `contains_key` and `remove`, where h is the height
//! - O(1) `len` and `is_empty`
//! - In-order iteration yields keys in strictly ascending comparator order
//!
//! There is no rebalancing, so inserting keys in sorted order degrades the
//! tree into a linked spine of height n. Every traversal is iterative, and so
//! is `Drop`, so deep trees never exhaust the call stack.
//!
//! # Examples
//!
//! ```rust
//! use coffer::BinarySearchTreeMap;
//!
//! let mut ledger = BinarySearchTreeMap::new(i32::cmp);
//! ledger.put(20, "rent");
//! ledger.put(5, "coffee");
//! ledger.put(12, "books");
//!
//! let days: Vec<&i32> = ledger.keys().collect();
//! assert_eq!(days, vec![&5, &12, &20]);
//! assert_eq!(ledger.put(5, "tea"), Some("coffee"));
//! ```
//!
//! # Internal Structure
//!
//! Each node owns its two subtrees through `Option<Box<_>>`. For every node,
//! keys in the left subtree compare less than its key and keys in the right
//! subtree compare greater; equal keys never coexist.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

// =============================================================================
// Node Definition
// =============================================================================

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// Detaches the minimum node of `subtree`, returning it with its right
/// subtree cleared, together with what remains of `subtree`.
fn detach_minimum<K, V>(mut subtree: Box<Node<K, V>>) -> (Box<Node<K, V>>, Link<K, V>) {
    let mut link = &mut subtree.left;
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = link else { break };
        link = &mut node.left;
    }
    match link.take() {
        Some(mut minimum) => {
            *link = minimum.right.take();
            (minimum, Some(subtree))
        }
        None => {
            let remainder = subtree.right.take();
            (subtree, remainder)
        }
    }
}

// =============================================================================
// BinarySearchTreeMap Definition
// =============================================================================

/// An ordered map backed by an unbalanced binary search tree.
///
/// # Time Complexity
///
/// | Operation      | Average  | Worst (sorted input) |
/// |----------------|----------|----------------------|
/// | `put`          | O(log n) | O(n)                 |
/// | `get`          | O(log n) | O(n)                 |
/// | `remove`       | O(log n) | O(n)                 |
/// | `first`/`last` | O(log n) | O(n)                 |
/// | `len`          | O(1)     | O(1)                 |
pub struct BinarySearchTreeMap<K, V, C> {
    root: Link<K, V>,
    length: usize,
    comparator: C,
}

impl<K, V, C> BinarySearchTreeMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Creates an empty map ordered by `comparator`.
    #[must_use]
    pub const fn new(comparator: C) -> Self {
        Self {
            root: None,
            length: 0,
            comparator,
        }
    }

    /// Associates `value` with `key`, returning the previous value if the key
    /// was already present.
    ///
    /// A new key becomes a leaf at the first empty child reached on the way
    /// down. An existing key keeps its node; only the value is replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::BinarySearchTreeMap;
    ///
    /// let mut map = BinarySearchTreeMap::new(|a: &&str, b: &&str| a.cmp(b));
    /// assert_eq!(map.put("groceries", 40), None);
    /// assert_eq!(map.put("groceries", 55), Some(40));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match (self.comparator)(&key, &node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            }
        }
        *link = Some(Box::new(Node::leaf(key, value)));
        self.length += 1;
        None
    }

    /// Returns a reference to the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match (self.comparator)(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match (self.comparator)(key, &node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// A leaf is simply detached and a node with one child is replaced by that
    /// child. A node with two children is replaced by its in-order successor,
    /// the minimum of its right subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coffer::BinarySearchTreeMap;
    ///
    /// let mut map = BinarySearchTreeMap::new(i32::cmp);
    /// for key in [50, 30, 70, 60, 80] {
    ///     map.put(key, key * 10);
    /// }
    /// assert_eq!(map.remove(&70), Some(700));
    /// assert_eq!(map.remove(&70), None);
    /// let keys: Vec<i32> = map.keys().copied().collect();
    /// assert_eq!(keys, vec![30, 50, 60, 80]);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let comparator = &self.comparator;
        let mut link = &mut self.root;
        loop {
            let ordering = comparator(key, &link.as_ref()?.key);
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = link else { return None };
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let mut removed = link.take()?;
        *link = match (removed.left.take(), removed.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (mut successor, remainder) = detach_minimum(right);
                successor.left = Some(left);
                successor.right = remainder;
                Some(successor)
            }
        };
        self.length -= 1;
        Some(removed.value)
    }
}

impl<K, V, C> BinarySearchTreeMap<K, V, C> {
    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the entry with the least key.
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the greatest key.
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty map has height 0 and a single entry has height 1.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<K, V>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            pending.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.length = 0;
    }

    /// Returns an iterator over the entries in ascending key order.
    pub fn iter(&self) -> BinarySearchTreeMapIterator<'_, K, V> {
        let mut iterator = BinarySearchTreeMapIterator {
            stack: Vec::new(),
            remaining: self.length,
        };
        iterator.push_left_spine(self.root.as_deref());
        iterator
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns the comparator.
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }
}

impl<K, V, C> Drop for BinarySearchTreeMap<K, V, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// In-order iterator over a [`BinarySearchTreeMap`].
///
/// Holds the pending left spine on an explicit stack.
pub struct BinarySearchTreeMapIterator<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> BinarySearchTreeMapIterator<'a, K, V> {
    fn push_left_spine(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for BinarySearchTreeMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for BinarySearchTreeMapIterator<'_, K, V> {}

/// Owning in-order iterator over a [`BinarySearchTreeMap`].
pub struct BinarySearchTreeMapIntoIterator<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> BinarySearchTreeMapIntoIterator<K, V> {
    fn push_left_spine(&mut self, mut current: Link<K, V>) {
        while let Some(mut node) = current {
            current = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for BinarySearchTreeMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some((node.key, node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for BinarySearchTreeMapIntoIterator<K, V> {}

impl<K, V> Drop for BinarySearchTreeMapIntoIterator<K, V> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C> Extend<(K, V)> for BinarySearchTreeMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        for (key, value) in iterable {
            self.put(key, value);
        }
    }
}

impl<K, V, C> IntoIterator for BinarySearchTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = BinarySearchTreeMapIntoIterator<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iterator = BinarySearchTreeMapIntoIterator {
            stack: Vec::new(),
            remaining: mem::take(&mut self.length),
        };
        iterator.push_left_spine(self.root.take());
        iterator
    }
}

impl<'a, K, V, C> IntoIterator for &'a BinarySearchTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = BinarySearchTreeMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for BinarySearchTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for BinarySearchTreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> BinarySearchTreeMap<i32, i32, fn(&i32, &i32) -> Ordering> {
        let mut map = BinarySearchTreeMap::new(i32::cmp as fn(&i32, &i32) -> Ordering);
        for key in [50, 30, 70, 20, 40, 60, 80, 35, 45, 65] {
            map.put(key, key * 10);
        }
        map
    }

    fn assert_search_order<K: Copy + Ord + fmt::Debug, V, C>(map: &BinarySearchTreeMap<K, V, C>) {
        let keys: Vec<K> = map.keys().copied().collect();
        assert!(
            keys.windows(2).all(|pair| pair[0] < pair[1]),
            "in-order keys not strictly increasing: {keys:?}"
        );
        assert_eq!(keys.len(), map.len());
    }

    #[rstest]
    fn test_put_overwrite_keeps_shape() {
        let mut map = sample();
        let height = map.height();
        assert_eq!(map.put(40, 0), Some(400));
        assert_eq!(map.height(), height);
        assert_eq!(map.get(&40), Some(&0));
        assert_eq!(map.len(), 10);
    }

    #[rstest]
    #[case::leaf(20)]
    #[case::single_child(60)]
    #[case::two_children_successor_is_child(70)]
    #[case::two_children_successor_is_deeper(30)]
    #[case::root(50)]
    fn test_remove_keeps_search_order(#[case] key: i32) {
        let mut map = sample();
        assert_eq!(map.remove(&key), Some(key * 10));
        assert!(!map.contains_key(&key));
        assert_eq!(map.len(), 9);
        assert_search_order(&map);
        for other in [50, 30, 70, 20, 40, 60, 80, 35, 45, 65] {
            if other != key {
                assert_eq!(map.get(&other), Some(&(other * 10)));
            }
        }
    }

    #[rstest]
    fn test_remove_everything() {
        let mut map = sample();
        for key in [50, 30, 70, 20, 40, 60, 80, 35, 45, 65] {
            assert!(map.remove(&key).is_some());
            assert_search_order(&map);
        }
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
    }

    #[rstest]
    fn test_first_last_and_height() {
        let map = sample();
        assert_eq!(map.first(), Some((&20, &200)));
        assert_eq!(map.last(), Some((&80, &800)));
        assert_eq!(map.height(), 4);
    }

    #[rstest]
    fn test_sorted_insertion_degenerates_without_overflow() {
        let mut map = BinarySearchTreeMap::new(u32::cmp);
        for key in 0..10_000_u32 {
            map.put(key, ());
        }
        assert_eq!(map.height(), 10_000);
        assert_eq!(map.iter().count(), 10_000);
        assert!(map.contains_key(&9_999));
        drop(map);
    }

    #[rstest]
    fn test_into_iter_partial_consumption_drops_rest() {
        let mut map = BinarySearchTreeMap::new(u32::cmp);
        map.extend((0..5_000_u32).map(|key| (key, key.to_string())));
        let mut entries = map.into_iter();
        assert_eq!(entries.next(), Some((0, "0".to_string())));
        assert_eq!(entries.len(), 4_999);
    }

    #[rstest]
    fn test_reverse_comparator() {
        let mut map = BinarySearchTreeMap::new(|a: &i32, b: &i32| b.cmp(a));
        map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, vec![3, 2, 1]);
    }
}
