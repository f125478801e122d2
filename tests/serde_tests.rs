#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Sequences serialize as JSON arrays in iteration order; maps as JSON
//! objects.

use coffer::{ChainedHashMap, DoublyLinkedList, DynamicArray, HashSet, Queue, Stack};
use rstest::rstest;

#[rstest]
fn test_dynamic_array_json_roundtrip() {
    let array: DynamicArray<i32> = (1..=5).collect();
    let json = serde_json::to_string(&array).unwrap();
    assert_eq!(json, "[1,2,3,4,5]");
    let restored: DynamicArray<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(array, restored);
}

#[rstest]
fn test_linked_list_json_roundtrip() {
    let list: DoublyLinkedList<String> = ["a", "b"].iter().map(|s| (*s).to_string()).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#"["a","b"]"#);
    let restored: DoublyLinkedList<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_queue_and_stack_keep_order() {
    let queue: Queue<i32> = (1..=3).collect();
    let stack: Stack<i32> = (1..=3).collect();

    let mut restored_queue: Queue<i32> =
        serde_json::from_str(&serde_json::to_string(&queue).unwrap()).unwrap();
    let mut restored_stack: Stack<i32> =
        serde_json::from_str(&serde_json::to_string(&stack).unwrap()).unwrap();

    assert_eq!(restored_queue.poll(), Some(1));
    assert_eq!(restored_stack.pop(), Some(3));
}

#[rstest]
fn test_bounded_stack_deserializes_unbounded() {
    let mut stack = Stack::with_max_depth(2).unwrap();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.push(3), Some(1));
    let json = serde_json::to_string(&stack).unwrap();
    assert_eq!(json, "[2,3]");

    let mut restored: Stack<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.max_depth(), None);
    assert_eq!(restored.push(4), None);
    assert_eq!(restored.len(), 3);
    assert_eq!(restored.pop(), Some(4));
    assert_eq!(restored.pop(), Some(3));
}

#[rstest]
fn test_chained_hash_map_json_roundtrip() {
    let mut map: ChainedHashMap<String, i32> = ChainedHashMap::new();
    map.put("rent".to_string(), 900);
    map.put("food".to_string(), 300);

    let json = serde_json::to_string(&map).unwrap();
    let restored: ChainedHashMap<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(map, restored);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["rent"], 900);
}

#[rstest]
fn test_hash_set_json_roundtrip() {
    let set: HashSet<u8> = (0..10).collect();
    let json = serde_json::to_string(&set).unwrap();
    let restored: HashSet<u8> = serde_json::from_str(&json).unwrap();
    assert_eq!(set, restored);
}

#[rstest]
fn test_rejects_wrong_shape() {
    let result: Result<DynamicArray<i32>, _> = serde_json::from_str(r#"{"a":1}"#);
    assert!(result.is_err());
}
