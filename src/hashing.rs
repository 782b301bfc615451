//! Bucket-index hash functions.
//!
//! Two deliberately different rolling hashes over string keys. `FullScan`
//! folds every character into a base-31 polynomial; `Sampled` folds at most
//! eight evenly spaced characters into a base-37 polynomial, discarding the
//! rest of a long key. The point of keeping both is comparative: the tables
//! report key-comparison counts per search, so the collision cost of the
//! lossy hash can be measured against the full one on the same data.
//!
//! Both variants run in wrapping 32-bit signed arithmetic on purpose. The
//! distribution of bucket indices depends on the wraparound, so widening the
//! accumulator would change behavior, not just avoid overflow.

/// Named hash strategy, passed explicitly to every table operation.
///
/// A table instance must be queried with the same variant it was loaded
/// with; the variants place keys in different buckets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BucketHash {
    /// Base-37 polynomial over at most 8 evenly spaced characters.
    Sampled,
    /// Base-31 polynomial over every character.
    FullScan,
}

impl BucketHash {
    /// Map `key` to a bucket index in `[0, capacity)`.
    ///
    /// Pure and deterministic: the same `(key, capacity)` always yields the
    /// same index. `capacity` must be at least 1.
    pub fn index(self, key: &str, capacity: usize) -> usize {
        debug_assert!(capacity >= 1, "capacity must be at least 1");
        let acc: i32 = match self {
            BucketHash::FullScan => key
                .chars()
                .fold(0_i32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as i32)),
            BucketHash::Sampled => {
                let step = (key.chars().count() / 8).max(1);
                key.chars()
                    .step_by(step)
                    .fold(0_i32, |acc, c| acc.wrapping_mul(37).wrapping_add(c as i32))
            }
        };
        // unsigned_abs is total; i32::MIN maps to 2^31 instead of panicking.
        acc.unsigned_abs() as usize % capacity
    }
}
