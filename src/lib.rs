//! # coffer
//!
//! General-purpose in-memory collections built from first principles.
//!
//! ## Overview
//!
//! Every structure is a plain single-owner container: no interior mutability,
//! no synchronisation and no `unsafe`. Absent results are reported as
//! [`Option::None`]; index-based misuse and invalid construction parameters are
//! reported as [`CollectionError`].
//!
//! - **Sequential**: [`DynamicArray`], [`DoublyLinkedList`], [`Queue`], [`Stack`]
//! - **Hashed**: [`ChainedHashMap`], [`HashSet`]
//! - **Heaps**: [`BinaryMinHeap`], [`PriorityQueue`]
//! - **Ordered**: [`BinarySearchTreeMap`], [`TreeSet`]
//! - **Facades**: [`Map`], [`Set`], [`Array`]
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the sequential and hashed collections
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hash builder
//! - `ahash`: use `ahash::AHasher` as the default hash builder
//! - `full`: enable `serde`
//!
//! ## Example
//!
//! ```rust
//! use coffer::prelude::*;
//!
//! let mut spending: ChainedHashMap<&str, u32> = ChainedHashMap::new();
//! spending.put("food", 120);
//! spending.put("rent", 900);
//!
//! let mut by_amount = BinaryMinHeap::new(|a: &(&str, u32), b: &(&str, u32)| b.1.cmp(&a.1));
//! by_amount.extend(spending.iter().map(|(category, amount)| (*category, *amount)));
//! assert_eq!(by_amount.poll(), Some(("rent", 900)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every collection type and the error type.
///
/// # Usage
///
/// ```rust
/// use coffer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::facade::*;
    pub use crate::hashed::{ChainedHashMap, HashSet};
    pub use crate::heap::*;
    pub use crate::ordered::{BinarySearchTreeMap, TreeSet};
    pub use crate::sequential::{DoublyLinkedList, DynamicArray, Queue, Stack};
}

pub mod error;
pub mod facade;
pub mod hashed;
pub mod hashing;
pub mod heap;
pub mod ordered;
pub mod sequential;

#[cfg(feature = "serde")]
mod serde_support;

pub use error::{CollectionError, CollectionResult};
pub use facade::{Array, Map, Set};
pub use hashed::{ChainedHashMap, HashSet};
pub use heap::{BinaryMinHeap, PriorityQueue};
pub use ordered::{BinarySearchTreeMap, TreeSet};
pub use sequential::{DoublyLinkedList, DynamicArray, Queue, Stack};
