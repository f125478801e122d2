//! Hash-based collections.
//!
//! - [`ChainedHashMap`]: hash table with per-bucket chains and full rehash on
//!   growth
//! - [`HashSet`]: set of keys over a [`ChainedHashMap`] with a unit sentinel
//!
//! Both take an optional [`BuildHasher`](std::hash::BuildHasher) type
//! parameter, defaulting to [`DefaultHashBuilder`](crate::hashing::DefaultHashBuilder).

pub mod chained_hashmap;
mod hashset;

pub use chained_hashmap::ChainedHashMap;
pub use chained_hashmap::ChainedHashMapIntoIterator;
pub use chained_hashmap::ChainedHashMapIterMut;
pub use chained_hashmap::ChainedHashMapIterator;
pub use hashset::HashSet;
pub use hashset::HashSetIntoIterator;
pub use hashset::HashSetIterator;

static_assertions::assert_impl_all!(ChainedHashMap<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(HashSet<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(ChainedHashMap<std::rc::Rc<str>, i32>: Send, Sync);
