//! Integration tests for DynamicArray.

use coffer::sequential::dynamic_array::DEFAULT_CAPACITY;
use coffer::{CollectionError, DynamicArray};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_uses_default_capacity() {
    let array: DynamicArray<i32> = DynamicArray::new();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), DEFAULT_CAPACITY);
}

#[rstest]
fn test_with_capacity_zero_is_rejected() {
    let result: Result<DynamicArray<i32>, _> = DynamicArray::with_capacity(0);
    assert_eq!(
        result.err(),
        Some(CollectionError::InvalidCapacity { capacity: 0 })
    );
}

// =============================================================================
// Bounds checking
// =============================================================================

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn test_get_at_len_is_out_of_range(#[case] length: usize) {
    let array: DynamicArray<usize> = (0..length).collect();
    assert_eq!(
        array.get(length),
        Err(CollectionError::OutOfRange {
            index: length,
            len: length
        })
    );
}

#[rstest]
fn test_negative_style_index_is_out_of_range() {
    let array: DynamicArray<i32> = (1..=3).collect();
    assert!(array.get(usize::MAX).is_err());
}

#[rstest]
fn test_insert_at_len_succeeds_and_past_len_fails() {
    let mut array: DynamicArray<char> = "abc".chars().collect();
    assert_eq!(array.insert_at(4, 'z'), Err(CollectionError::OutOfRange { index: 4, len: 3 }));
    assert_eq!(array.insert_at(3, 'd'), Ok(()));
    assert_eq!(array.to_vec(), vec!['a', 'b', 'c', 'd']);
}

#[rstest]
fn test_remove_at_out_of_range_leaves_array_intact() {
    let mut array: DynamicArray<i32> = (1..=3).collect();
    assert!(array.remove_at(3).is_err());
    assert_eq!(array.to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Shifting and growth
// =============================================================================

#[rstest]
fn test_insert_and_remove_shift_elements() {
    let mut array: DynamicArray<i32> = vec![10, 30].into_iter().collect();
    array.insert_at(1, 20).unwrap();
    array.insert_at(0, 0).unwrap();
    assert_eq!(array.to_vec(), vec![0, 10, 20, 30]);

    assert_eq!(array.remove_at(1), Ok(10));
    assert_eq!(array.remove_at(2), Ok(30));
    assert_eq!(array.to_vec(), vec![0, 20]);
}

#[rstest]
fn test_append_past_capacity_preserves_order() {
    let mut array = DynamicArray::with_capacity(1).unwrap();
    for value in 0..1_000 {
        array.append(value);
    }
    assert_eq!(array.len(), 1_000);
    for index in 0..1_000 {
        assert_eq!(array.get(index), Ok(&index));
    }
}

#[rstest]
fn test_set_replaces_in_place() {
    let mut array: DynamicArray<&str> = vec!["rent", "food"].into_iter().collect();
    assert_eq!(array.set(1, "fuel"), Ok("food"));
    assert_eq!(array[1], "fuel");
    assert_eq!(array.len(), 2);
}

// =============================================================================
// Search helpers
// =============================================================================

#[rstest]
fn test_index_of_and_last_index_of() {
    let array: DynamicArray<i32> = vec![4, 7, 4, 9].into_iter().collect();
    assert_eq!(array.index_of(&4), Some(0));
    assert_eq!(array.last_index_of(&4), Some(2));
    assert_eq!(array.index_of(&5), None);
    assert!(array.contains(&9));
}

#[rstest]
fn test_remove_item_removes_first_occurrence() {
    let mut array: DynamicArray<i32> = vec![1, 2, 1].into_iter().collect();
    assert_eq!(array.remove_item(&1), Some(1));
    assert_eq!(array.to_vec(), vec![2, 1]);
    assert_eq!(array.remove_item(&5), None);
}

#[rstest]
fn test_retain_keeps_matching_in_order() {
    let mut array: DynamicArray<i32> = (1..=10).collect();
    array.retain(|value| value % 3 == 0);
    assert_eq!(array.to_vec(), vec![3, 6, 9]);
}

// =============================================================================
// Bulk operations and range views
// =============================================================================

#[rstest]
#[case(0, vec![7, 8, 1, 2, 3])]
#[case(1, vec![1, 7, 8, 2, 3])]
#[case(3, vec![1, 2, 3, 7, 8])]
fn test_insert_all_at_places_block_in_order(#[case] index: usize, #[case] expected: Vec<i32>) {
    let mut array: DynamicArray<i32> = (1..=3).collect();
    assert_eq!(array.insert_all_at(index, vec![7, 8]), Ok(()));
    assert_eq!(array.to_vec(), expected);
}

#[rstest]
fn test_insert_all_at_past_len_leaves_array_intact() {
    let mut array: DynamicArray<i32> = (1..=3).collect();
    assert_eq!(
        array.insert_all_at(4, [9, 9]),
        Err(CollectionError::OutOfRange { index: 4, len: 3 })
    );
    assert_eq!(array.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_insert_all_at_grows_past_capacity() {
    let mut array = DynamicArray::with_capacity(2).unwrap();
    array.append(0);
    array.append(100);
    array.insert_all_at(1, 1..50).unwrap();
    let expected: Vec<i32> = (0..50).chain(std::iter::once(100)).collect();
    assert_eq!(array.to_vec(), expected);
    assert!(array.capacity() >= 51);
}

#[rstest]
fn test_insert_all_at_with_empty_iterable_is_noop() {
    let mut array: DynamicArray<i32> = (1..=3).collect();
    array.insert_all_at(1, std::iter::empty()).unwrap();
    assert_eq!(array.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_remove_all_drops_every_occurrence() {
    let mut array: DynamicArray<&str> = vec!["rent", "food", "rent", "fuel"].into_iter().collect();
    assert!(array.remove_all(&["rent", "gifts"]));
    assert_eq!(array.to_vec(), vec!["food", "fuel"]);
    assert!(!array.remove_all(&["gifts"]));
    assert!(!array.remove_all(&[]));
}

#[rstest]
#[case(&[], true)]
#[case(&[2, 3], true)]
#[case(&[3, 3, 1], true)]
#[case(&[1, 4], false)]
fn test_contains_all(#[case] values: &[i32], #[case] expected: bool) {
    let array: DynamicArray<i32> = (1..=3).collect();
    assert_eq!(array.contains_all(values), expected);
}

#[rstest]
fn test_range_yields_sub_sequence() {
    let array: DynamicArray<i32> = (10..20).collect();
    let middle: Vec<i32> = array.range(2..5).unwrap().copied().collect();
    let reversed: Vec<i32> = array.range(2..5).unwrap().rev().copied().collect();
    assert_eq!(middle, vec![12, 13, 14]);
    assert_eq!(reversed, vec![14, 13, 12]);
    assert_eq!(array.range(0..10).unwrap().len(), 10);
    assert_eq!(array.range(10..10).unwrap().len(), 0);
}

#[rstest]
#[case(3..11, 11)]
#[case(5..4, 5)]
#[case(11..12, 12)]
fn test_range_rejects_invalid_bounds(#[case] range: std::ops::Range<usize>, #[case] index: usize) {
    let array: DynamicArray<i32> = (10..20).collect();
    assert_eq!(
        array.range(range).err(),
        Some(CollectionError::OutOfRange { index, len: 10 })
    );
}

// =============================================================================
// Formatting and iteration
// =============================================================================

#[rstest]
fn test_display_and_debug() {
    let array: DynamicArray<i32> = (1..=3).collect();
    assert_eq!(format!("{array}"), "[1, 2, 3]");
    assert_eq!(format!("{array:?}"), "[1, 2, 3]");
}

#[rstest]
fn test_iterators_agree() {
    let mut array: DynamicArray<i32> = (1..=4).collect();
    for value in array.iter_mut() {
        *value *= 10;
    }
    let borrowed: Vec<i32> = array.iter().copied().collect();
    let reversed: Vec<i32> = array.iter().rev().copied().collect();
    let owned: Vec<i32> = array.into_iter().collect();
    assert_eq!(borrowed, vec![10, 20, 30, 40]);
    assert_eq!(reversed, vec![40, 30, 20, 10]);
    assert_eq!(owned, borrowed);
}
