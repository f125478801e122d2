//! Hash computation for the chained hash table.
//!
//! Keys are hashed with a [`BuildHasher`] and the result is passed through a
//! supplemental mixing function before it is masked down to a bucket index.
//! Power-of-two tables only look at the low bits of the hash, so the mixing
//! step folds high bits downward to keep keys whose hashes differ only in
//! their upper bits from piling into the same bucket.
//!
//! # Default Hasher
//!
//! The default [`DefaultHashBuilder`] is deterministic: the same key hashes to
//! the same value in every process, so bucket layout and iteration order are
//! reproducible. The hasher is selected at compile time:
//!
//! - default: `BuildHasherDefault<DefaultHasher>` (SipHash with fixed keys)
//! - `fxhash` feature: `rustc_hash::FxBuildHasher`
//! - `ahash` feature: `BuildHasherDefault<ahash::AHasher>`

use std::hash::{BuildHasher, Hash};

#[cfg(feature = "fxhash")]
/// Hash builder used when no other is supplied.
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
/// Hash builder used when no other is supplied.
pub type DefaultHashBuilder = std::hash::BuildHasherDefault<ahash::AHasher>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
/// Hash builder used when no other is supplied.
pub type DefaultHashBuilder =
    std::hash::BuildHasherDefault<std::collections::hash_map::DefaultHasher>;

/// Spreads the entropy of `hash` into its low bits.
#[inline]
#[must_use]
pub const fn mix(hash: u64) -> u64 {
    let folded = hash ^ (hash >> 32);
    let spread = folded ^ (folded >> 20) ^ (folded >> 12);
    spread ^ (spread >> 7) ^ (spread >> 4)
}

/// Hashes `key` with `builder` and applies [`mix`].
#[inline]
pub fn hash_key<Q, S>(builder: &S, key: &Q) -> u64
where
    Q: Hash + ?Sized,
    S: BuildHasher,
{
    mix(builder.hash_one(key))
}

/// Maps a mixed hash onto a bucket of a table with `capacity` buckets.
///
/// `capacity` must be a power of two.
#[inline]
#[must_use]
pub const fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash & (capacity as u64 - 1)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_hash_key_is_deterministic() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(hash_key(&builder, "ledger"), hash_key(&builder, "ledger"));
        assert_eq!(
            hash_key(&builder, "ledger"),
            hash_key(&DefaultHashBuilder::default(), "ledger")
        );
    }

    #[rstest]
    fn test_mix_separates_high_bit_only_differences() {
        let capacity = 16;
        let indices: std::collections::BTreeSet<usize> = (0..16u64)
            .map(|high| bucket_index(mix(high << 40), capacity))
            .collect();
        assert!(indices.len() > 1);
    }

    #[rstest]
    #[case(0, 16, 0)]
    #[case(17, 16, 1)]
    #[case(u64::MAX, 8, 7)]
    fn test_bucket_index_masks_low_bits(
        #[case] hash: u64,
        #[case] capacity: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(bucket_index(hash, capacity), expected);
    }

    #[rstest]
    fn test_absent_key_hashes_like_any_other_key() {
        let builder = DefaultHashBuilder::default();
        let absent: Option<&str> = None;
        assert_eq!(hash_key(&builder, &absent), hash_key(&builder, &None::<&str>));
    }
}
