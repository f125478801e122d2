//! Priority queue over [`BinaryMinHeap`].

use std::cmp::Ordering;
use std::fmt;

use super::min_heap::BinaryMinHeap;
use crate::error::CollectionResult;
use crate::sequential::DynamicArrayIterator;

/// A lowest-first priority queue.
///
/// This is a thin wrapper around [`BinaryMinHeap`]: the element that compares
/// least under the comparator is always served first.
///
/// # Examples
///
/// ```rust
/// use coffer::PriorityQueue;
///
/// struct Account {
///     id: &'static str,
///     balance_cents: i64,
/// }
///
/// let mut lowest_first = PriorityQueue::new(|a: &Account, b: &Account| {
///     a.balance_cents.cmp(&b.balance_cents)
/// });
/// lowest_first.offer(Account { id: "savings", balance_cents: 120_000 });
/// lowest_first.offer(Account { id: "checking", balance_cents: 4_500 });
///
/// assert_eq!(lowest_first.peek().map(|account| account.id), Some("checking"));
/// assert_eq!(lowest_first.len(), 2);
/// ```
#[derive(Clone)]
pub struct PriorityQueue<E, C> {
    heap: BinaryMinHeap<E, C>,
}

impl<E, C> PriorityQueue<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    /// Creates an empty queue ordered by `comparator`.
    #[must_use]
    pub fn new(comparator: C) -> Self {
        Self {
            heap: BinaryMinHeap::new(comparator),
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidCapacity`](crate::CollectionError::InvalidCapacity)
    /// when `capacity` is zero.
    pub fn with_capacity(capacity: usize, comparator: C) -> CollectionResult<Self> {
        BinaryMinHeap::with_capacity(capacity, comparator).map(|heap| Self { heap })
    }

    /// Adds an element.
    pub fn add(&mut self, element: E) {
        self.heap.add(element);
    }

    /// Adds an element; alias of [`add`](Self::add).
    pub fn offer(&mut self, element: E) {
        self.heap.add(element);
    }

    /// Removes and returns the lowest element.
    pub fn poll(&mut self) -> Option<E> {
        self.heap.poll()
    }

    /// Returns the lowest element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&E> {
        self.heap.peek()
    }

    /// Removes the first element matching `predicate`.
    ///
    /// See [`BinaryMinHeap::remove_first_match`].
    pub fn remove_first_match<P>(&mut self, predicate: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        self.heap.remove_first_match(predicate)
    }
}

impl<E, C> PriorityQueue<E, C> {
    /// Returns the number of queued elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Returns an iterator over the queued elements in no particular order.
    pub fn iter(&self) -> DynamicArrayIterator<'_, E> {
        self.heap.iter()
    }
}

impl<E, C> Extend<E> for PriorityQueue<E, C>
where
    C: Fn(&E, &E) -> Ordering,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iterable: I) {
        self.heap.extend(iterable);
    }
}

impl<'a, E, C> IntoIterator for &'a PriorityQueue<E, C> {
    type Item = &'a E;
    type IntoIter = DynamicArrayIterator<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug, C> fmt::Debug for PriorityQueue<E, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
