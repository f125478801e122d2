//! Property-based tests for ChainedHashMap.
//!
//! The map is checked against `std::collections::HashMap` as a model.

use coffer::ChainedHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), any::<i32>()), 0..200)
}

#[derive(Debug, Clone)]
enum Operation {
    Put(String, i32),
    Remove(String),
}

fn arbitrary_operations() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(
        prop_oneof![
            3 => (arbitrary_key(), any::<i32>()).prop_map(|(key, value)| Operation::Put(key, value)),
            1 => arbitrary_key().prop_map(Operation::Remove),
        ],
        0..300,
    )
}

// =============================================================================
// Get-Put Law: put(k, v) then get(k) == Some(v)
// =============================================================================

proptest! {
    #[test]
    fn prop_get_put_law(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in any::<i32>()
    ) {
        let mut map: ChainedHashMap<String, i32> = entries.into_iter().collect();
        map.put(key.clone(), value);
        prop_assert_eq!(map.get(&key), Some(&value));
    }
}

// =============================================================================
// Remove-Get Law: remove(k) then get(k) == None
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_get_law(entries in arbitrary_entries(), key in arbitrary_key()) {
        let mut map: ChainedHashMap<String, i32> = entries.into_iter().collect();
        map.remove(&key);
        prop_assert_eq!(map.get(&key), None);
        prop_assert!(!map.contains_key(&key));
    }
}

// =============================================================================
// Model equivalence under mixed operations, including small tables that
// resize repeatedly
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_std_model(
        operations in arbitrary_operations(),
        capacity in 1_usize..8,
        load_factor in 0.25_f32..2.0
    ) {
        let mut map = ChainedHashMap::with_capacity_and_load_factor(capacity, load_factor).unwrap();
        let mut model = HashMap::new();

        for operation in operations {
            match operation {
                Operation::Put(key, value) => {
                    prop_assert_eq!(map.put(key.clone(), value), model.insert(key, value));
                }
                Operation::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                }
            }
            prop_assert_eq!(map.len(), model.len());
        }

        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
        prop_assert_eq!(map.iter().count(), model.len());
    }
}

// =============================================================================
// Capacity Law: the table is never fuller than its threshold allows
// =============================================================================

proptest! {
    #[test]
    fn prop_load_stays_bounded(keys in prop::collection::hash_set(any::<u32>(), 0..400)) {
        let mut map = ChainedHashMap::with_capacity_and_load_factor(4, 0.75).unwrap();
        for key in &keys {
            map.put(*key, ());
        }
        prop_assert!(map.capacity().is_power_of_two());
        #[allow(clippy::cast_precision_loss)]
        let load = map.len() as f32 / map.capacity() as f32;
        prop_assert!(load <= 0.75);
    }
}
