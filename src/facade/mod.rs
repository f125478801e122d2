//! Reduced-surface facades.
//!
//! [`Map`], [`Set`] and [`Array`] expose only the handful of operations most
//! callers need, delegating to the full collections underneath.

mod array;
mod map;
mod set;

pub use array::Array;
pub use map::Map;
pub use set::Set;
