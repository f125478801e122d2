//! Integration tests for DoublyLinkedList.

use coffer::DoublyLinkedList;
use rstest::rstest;

#[rstest]
fn test_both_ends() {
    let mut list = DoublyLinkedList::new();
    list.add_last(2);
    list.add_first(1);
    list.add_last(3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.len(), 3);

    assert_eq!(list.remove_first(), Some(1));
    assert_eq!(list.remove_last(), Some(3));
    assert_eq!(list.remove_last(), Some(2));
    assert_eq!(list.remove_first(), None);
    assert_eq!(list.remove_last(), None);
    assert!(list.is_empty());
}

#[rstest]
fn test_single_element_is_front_and_back() {
    let mut list = DoublyLinkedList::new();
    list.add_first("only");
    assert_eq!(list.front(), list.back());
    assert_eq!(list.remove_last(), Some("only"));
    assert_eq!(list.front(), None);
}

#[rstest]
fn test_iter_is_double_ended() {
    let list: DoublyLinkedList<i32> = (1..=5).collect();
    let forward: Vec<&i32> = list.iter().collect();
    let backward: Vec<&i32> = list.iter().rev().collect();
    assert_eq!(forward, vec![&1, &2, &3, &4, &5]);
    assert_eq!(backward, vec![&5, &4, &3, &2, &1]);

    let mut meeting = list.iter();
    assert_eq!(meeting.next(), Some(&1));
    assert_eq!(meeting.next_back(), Some(&5));
    assert_eq!(meeting.len(), 3);
}

#[rstest]
fn test_front_and_back_mut() {
    let mut list: DoublyLinkedList<i32> = (1..=3).collect();
    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    if let Some(back) = list.back_mut() {
        *back = 30;
    }
    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![10, 2, 30]);
}

#[rstest]
fn test_remove_first_match_in_middle() {
    let mut list: DoublyLinkedList<i32> = (1..=5).collect();
    assert_eq!(list.remove_first_match(|value| *value == 3), Some(3));
    assert_eq!(list.remove_first_match(|value| *value == 3), None);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
}

#[rstest]
fn test_slots_are_reused_after_churn() {
    let mut list = DoublyLinkedList::new();
    for round in 0..100 {
        list.add_last(round);
        list.add_first(round);
        list.remove_last();
    }
    assert_eq!(list.len(), 100);
    assert_eq!(list.front(), Some(&99));
}

#[rstest]
fn test_display_and_equality() {
    let list: DoublyLinkedList<i32> = (1..=3).collect();
    let same: DoublyLinkedList<i32> = vec![1, 2, 3].into_iter().collect();
    assert_eq!(format!("{list}"), "[1, 2, 3]");
    assert_eq!(list, same);
}
