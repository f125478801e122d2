//! Comparator-ordered collections.
//!
//! - [`BinarySearchTreeMap`]: unbalanced binary search tree map
//! - [`TreeSet`]: set of keys over a [`BinarySearchTreeMap`] with a unit
//!   sentinel
//!
//! Iteration is always in ascending comparator order.

mod tree_map;
mod tree_set;

pub use tree_map::BinarySearchTreeMap;
pub use tree_map::BinarySearchTreeMapIntoIterator;
pub use tree_map::BinarySearchTreeMapIterator;
pub use tree_set::TreeSet;
pub use tree_set::TreeSetIterator;

static_assertions::assert_impl_all!(BinarySearchTreeMap<String, i32, fn(&String, &String) -> std::cmp::Ordering>: Send, Sync);
static_assertions::assert_impl_all!(TreeSet<u64, fn(&u64, &u64) -> std::cmp::Ordering>: Send, Sync);
static_assertions::assert_not_impl_any!(BinarySearchTreeMap<i32, i32, fn(&i32, &i32) -> std::cmp::Ordering>: Clone);
