//! Shared serde visitors.
//!
//! Every sequential collection deserializes the same way: read the elements in
//! order and rebuild the collection through `FromIterator`.

use std::fmt;
use std::marker::PhantomData;

/// Upper bound on the buffer preallocated from an untrusted size hint.
const MAX_PREALLOCATE: usize = 4096;

/// Deserializes a sequence of `T` into any `C: FromIterator<T>`.
pub struct SequenceVisitor<C, T> {
    marker: PhantomData<fn() -> (C, T)>,
}

impl<C, T> SequenceVisitor<C, T> {
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, C, T> serde::de::Visitor<'de> for SequenceVisitor<C, T>
where
    C: FromIterator<T>,
    T: serde::Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

/// Deserializes a map of `K` to `V` into any `C: FromIterator<(K, V)>`.
pub struct MapVisitor<C, K, V> {
    marker: PhantomData<fn() -> (C, K, V)>,
}

impl<C, K, V> MapVisitor<C, K, V> {
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, C, K, V> serde::de::Visitor<'de> for MapVisitor<C, K, V>
where
    C: FromIterator<(K, V)>,
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let capacity = map.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut entries = Vec::with_capacity(capacity);
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(entries.into_iter().collect())
    }
}
