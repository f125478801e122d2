//! Error types for the collection library.
//!
//! Lookups that find nothing are not errors: they return `None`. The variants
//! here cover the two failure classes that are reported synchronously to the
//! caller:
//!
//! - **Out of range**: an index-based accessor was given an index outside
//!   the valid range for the current length.
//! - **Invalid construction**: a constructor was given a capacity or load
//!   factor it cannot honour.
//!
//! # Examples
//!
//! ```rust
//! use coffer::{CollectionError, DynamicArray};
//!
//! let array: DynamicArray<i32> = DynamicArray::new();
//! assert_eq!(
//!     array.get(0),
//!     Err(CollectionError::OutOfRange { index: 0, len: 0 })
//! );
//! ```

use thiserror::Error;

/// Errors raised by the collections in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CollectionError {
    /// An index fell outside `[0, len)` (or `[0, len]` for insertion).
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the collection at the time of the call.
        len: usize,
    },

    /// A constructor was given a capacity of zero.
    #[error("illegal capacity: {capacity}")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },

    /// A hash map was given a load factor that is not strictly positive.
    #[error("illegal load factor: {load_factor}")]
    InvalidLoadFactor {
        /// The rejected load factor.
        load_factor: f32,
    },
}

/// Result alias used by fallible collection operations.
pub type CollectionResult<T> = Result<T, CollectionError>;
