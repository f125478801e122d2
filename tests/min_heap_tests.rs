//! Integration tests for BinaryMinHeap and PriorityQueue.

use coffer::{BinaryMinHeap, CollectionError, PriorityQueue};
use rstest::rstest;
use std::cmp::Ordering;

#[rstest]
fn test_polls_in_ascending_order() {
    let mut heap = BinaryMinHeap::new(i32::cmp);
    for value in [5, 1, 8, 1, 3] {
        heap.add(value);
    }
    let polled: Vec<i32> = (0..5).filter_map(|_| heap.poll()).collect();
    assert_eq!(polled, vec![1, 1, 3, 5, 8]);
    assert_eq!(heap.poll(), None);
    assert_eq!(heap.peek(), None);
}

#[rstest]
fn test_peek_does_not_remove() {
    let mut heap = BinaryMinHeap::new(i32::cmp);
    heap.extend([4, 2, 9]);
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.peek(), Some(&2));
    assert_eq!(heap.len(), 3);
}

#[rstest]
fn test_comparator_defines_order() {
    let mut by_length = BinaryMinHeap::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    by_length.extend(["groceries", "tax", "fuel"]);
    assert_eq!(by_length.poll(), Some("tax"));
    assert_eq!(by_length.poll(), Some("fuel"));
    assert_eq!(by_length.poll(), Some("groceries"));
}

#[rstest]
fn test_into_sorted_vec_with_reverse_comparator() {
    let mut heap = BinaryMinHeap::new(|a: &u8, b: &u8| b.cmp(a));
    heap.extend([3, 7, 1, 9]);
    assert_eq!(heap.into_sorted_vec(), vec![9, 7, 3, 1]);
}

#[rstest]
fn test_with_capacity() {
    let heap = BinaryMinHeap::<i32, _>::with_capacity(32, i32::cmp).unwrap();
    assert!(heap.is_empty());
    assert!(BinaryMinHeap::<i32, _>::with_capacity(0, i32::cmp).is_err());
    assert!(matches!(
        PriorityQueue::<i32, _>::with_capacity(0, i32::cmp),
        Err(CollectionError::InvalidCapacity { capacity: 0 })
    ));
}

#[rstest]
fn test_clear_then_reuse() {
    let mut heap = BinaryMinHeap::new(i32::cmp);
    heap.extend(0..10);
    heap.clear();
    assert!(heap.is_empty());
    heap.add(42);
    assert_eq!(heap.poll(), Some(42));
}

// =============================================================================
// PriorityQueue
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Budget {
    name: &'static str,
    remaining: i64,
}

fn by_remaining(first: &Budget, second: &Budget) -> Ordering {
    first.remaining.cmp(&second.remaining)
}

#[rstest]
fn test_priority_queue_serves_lowest_first() {
    let mut queue = PriorityQueue::new(by_remaining);
    queue.add(Budget { name: "travel", remaining: 400 });
    queue.offer(Budget { name: "food", remaining: 25 });
    queue.offer(Budget { name: "fun", remaining: 90 });

    assert_eq!(queue.peek().map(|budget| budget.name), Some("food"));
    let order: Vec<&str> = std::iter::from_fn(|| queue.poll()).map(|budget| budget.name).collect();
    assert_eq!(order, vec!["food", "fun", "travel"]);
    assert!(queue.is_empty());
}

#[rstest]
fn test_priority_queue_update_by_reinsertion() {
    let mut queue = PriorityQueue::new(by_remaining);
    queue.extend([
        Budget { name: "travel", remaining: 400 },
        Budget { name: "food", remaining: 25 },
    ]);

    let mut food = queue.remove_first_match(|budget| budget.name == "food").unwrap();
    food.remaining += 1_000;
    queue.offer(food);

    assert_eq!(queue.poll().map(|budget| budget.name), Some("travel"));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.remove_first_match(|budget| budget.name == "rent"), None);
}
