//! Comparator-ordered heaps.
//!
//! - [`BinaryMinHeap`]: array-backed binary min-heap
//! - [`PriorityQueue`]: lowest-first queue over [`BinaryMinHeap`]
//!
//! Both require a comparator at construction; there is no natural-ordering
//! default. Pass `Ord::cmp` (for example `i32::cmp`) to order by `Ord`.

mod min_heap;
mod priority_queue;

pub use min_heap::BinaryMinHeap;
pub use priority_queue::PriorityQueue;

static_assertions::assert_impl_all!(BinaryMinHeap<i32, fn(&i32, &i32) -> std::cmp::Ordering>: Send, Sync, Clone);
static_assertions::assert_impl_all!(PriorityQueue<String, fn(&String, &String) -> std::cmp::Ordering>: Send, Sync);
