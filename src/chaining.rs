//! Separate-chaining table with owned singly-linked collision chains.

use crate::hashing::BucketHash;
use crate::lookup::Lookup;

struct Node {
    key: String,
    rank: u32,
    next: Option<Box<Node>>,
}

/// Fixed-capacity hash table resolving collisions by separate chaining.
///
/// Capacity is set at construction and never changes; there is no rehashing
/// and no deletion. Inserts append at the tail of the target bucket's chain,
/// so chain order is insertion order. Duplicate keys are not eliminated:
/// inserting the same key twice produces two chain nodes, and a search stops
/// at the first.
///
/// The stored rank is a payload only; searches compare keys, never ranks.
pub struct ChainingTable {
    buckets: Vec<Option<Box<Node>>>,
    len: usize,
}

impl ChainingTable {
    /// Create a table with `capacity` buckets. `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self { buckets, len: 0 }
    }

    /// Number of entries inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket. Chaining tolerates load factors above 1; the
    /// average successful-search cost grows with this ratio.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Append `(key, rank)` at the tail of the chain `hash` selects.
    /// Always succeeds; a chaining bucket has no capacity limit.
    pub fn insert(&mut self, key: &str, rank: u32, hash: BucketHash) {
        let index = hash.index(key, self.buckets.len());
        let mut slot = &mut self.buckets[index];
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(Node {
            key: key.to_string(),
            rank,
            next: None,
        }));
        self.len += 1;
    }

    /// Walk the chain `hash` selects, counting one comparison per node
    /// visited, until a node with an equal key is found or the chain ends.
    pub fn search(&self, key: &str, hash: BucketHash) -> Lookup {
        let index = hash.index(key, self.buckets.len());
        let mut comparisons = 0;
        let mut current = self.buckets[index].as_deref();
        while let Some(node) = current {
            comparisons += 1;
            if node.key == key {
                return Lookup {
                    found: true,
                    comparisons,
                };
            }
            current = node.next.as_deref();
        }
        Lookup {
            found: false,
            comparisons,
        }
    }

    /// Rank stored with the first chain node matching `key`, if any.
    pub fn rank(&self, key: &str, hash: BucketHash) -> Option<u32> {
        let index = hash.index(key, self.buckets.len());
        let mut current = self.buckets[index].as_deref();
        while let Some(node) = current {
            if node.key == key {
                return Some(node.rank);
            }
            current = node.next.as_deref();
        }
        None
    }
}

impl Drop for ChainingTable {
    // Unlink chains iteratively; the default recursive drop would use stack
    // proportional to the longest chain.
    fn drop(&mut self) {
        for head in &mut self.buckets {
            let mut current = head.take();
            while let Some(mut node) = current {
                current = node.next.take();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: every inserted key is found by a search with the same
    /// hash variant, and a successful search costs at least one comparison.
    #[test]
    fn inserted_keys_are_found() {
        for hash in [BucketHash::Sampled, BucketHash::FullScan] {
            let mut t = ChainingTable::new(1000);
            for (i, word) in ["account", "password", "letmein"].iter().enumerate() {
                t.insert(word, i as u32 + 1, hash);
            }
            assert_eq!(t.len(), 3);
            for word in ["account", "password", "letmein"] {
                let r = t.search(word, hash);
                assert!(r.found, "{word} must be found");
                assert!(r.comparisons >= 1);
            }
        }
    }

    /// Invariant: a miss on an empty bucket costs zero comparisons; a miss
    /// on an occupied bucket costs exactly the chain length.
    #[test]
    fn miss_cost_equals_chain_length() {
        // Capacity 1 forces every key into the same bucket.
        let mut t = ChainingTable::new(1);
        assert_eq!(t.search("absent", BucketHash::FullScan).comparisons, 0);

        for (i, word) in ["a", "b", "c", "d"].iter().enumerate() {
            t.insert(word, i as u32 + 1, BucketHash::FullScan);
        }
        let r = t.search("absent", BucketHash::FullScan);
        assert!(!r.found);
        assert_eq!(r.comparisons, 4);
    }

    /// Invariant: chains preserve insertion order (tail append), so the
    /// comparison count of a hit is the key's 1-based position in its chain.
    #[test]
    fn tail_append_preserves_order() {
        let mut t = ChainingTable::new(1);
        for (i, word) in ["first", "second", "third"].iter().enumerate() {
            t.insert(word, i as u32 + 1, BucketHash::Sampled);
        }
        assert_eq!(t.search("first", BucketHash::Sampled).comparisons, 1);
        assert_eq!(t.search("second", BucketHash::Sampled).comparisons, 2);
        assert_eq!(t.search("third", BucketHash::Sampled).comparisons, 3);
    }

    /// Invariant: duplicate keys produce two nodes (no elimination); the
    /// search stops at the first occurrence.
    #[test]
    fn duplicate_key_yields_two_nodes() {
        let mut t = ChainingTable::new(1);
        t.insert("dup", 1, BucketHash::FullScan);
        t.insert("other", 2, BucketHash::FullScan);
        t.insert("dup", 3, BucketHash::FullScan);
        assert_eq!(t.len(), 3);

        let r = t.search("dup", BucketHash::FullScan);
        assert!(r.found);
        assert_eq!(r.comparisons, 1, "first occurrence wins");
        assert_eq!(t.rank("dup", BucketHash::FullScan), Some(1));
    }

    /// Invariant: load factor reflects len/capacity and may exceed 1.
    #[test]
    fn load_factor_tracks_len() {
        let mut t = ChainingTable::new(2);
        assert_eq!(t.load_factor(), 0.0);
        for i in 0..4 {
            t.insert(&format!("w{i}"), i + 1, BucketHash::FullScan);
        }
        assert_eq!(t.load_factor(), 2.0);
    }

    // Dropping a table with a very long chain must not overflow the stack.
    #[test]
    fn long_chain_drops_without_recursion() {
        let mut t = ChainingTable::new(1);
        for i in 0..100_000u32 {
            t.insert(&format!("k{i}"), i + 1, BucketHash::FullScan);
        }
        drop(t);
    }
}
