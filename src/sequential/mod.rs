//! Index-addressable and linked sequences.
//!
//! - [`DynamicArray`]: growable contiguous array
//! - [`DoublyLinkedList`]: O(1) insertion and removal at both ends
//! - [`Queue`]: FIFO adapter over [`DoublyLinkedList`]
//! - [`Stack`]: LIFO adapter over [`DoublyLinkedList`], optionally bounded
//!
//! # Examples
//!
//! ```rust
//! use coffer::sequential::{Queue, Stack};
//!
//! let mut queue = Queue::new();
//! let mut stack = Stack::new();
//! for receipt in ["a", "b", "c"] {
//!     queue.offer(receipt);
//!     stack.push(receipt);
//! }
//!
//! assert_eq!(queue.poll(), Some("a"));
//! assert_eq!(stack.pop(), Some("c"));
//! ```

pub mod dynamic_array;
mod linked_list;
mod queue;
mod stack;

pub use dynamic_array::DynamicArray;
pub use dynamic_array::DynamicArrayIntoIterator;
pub use dynamic_array::DynamicArrayIterMut;
pub use dynamic_array::DynamicArrayIterator;
pub use linked_list::DoublyLinkedList;
pub use linked_list::DoublyLinkedListIntoIterator;
pub use linked_list::DoublyLinkedListIterator;
pub use linked_list::DoublyLinkedNode;
pub use queue::Queue;
pub use stack::Stack;

static_assertions::assert_impl_all!(DynamicArray<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(DoublyLinkedList<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Queue<String>: Send, Sync);
static_assertions::assert_impl_all!(Stack<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Queue<std::rc::Rc<i32>>: Send, Sync);
