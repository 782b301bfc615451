//! dict-tables: word-list password lookup over two hand-built,
//! comparison-counting hash tables.
//!
//! Internal design:
//!
//! Summary
//! - Goal: check whether a candidate password (or a digit-suffixed variant
//!   of it) appears in a known word list, and measure what each lookup
//!   costs under two collision-resolution strategies and two hash
//!   functions.
//! - Layers, leaf first:
//!   - `BucketHash`: two pure string-to-bucket hash variants — a full
//!     base-31 polynomial and a lossy base-37 polynomial sampling at most
//!     eight characters — in wrapping 32-bit signed arithmetic.
//!   - `ChainingTable`: fixed-capacity separate chaining with owned
//!     singly-linked chains; tail-append insert, first-match search.
//!   - `ProbingTable`: fixed-capacity linear probing over option slots;
//!     no tombstones, scans bounded at capacity.
//!   - `StrengthChecker`: owns one table per (strategy, hash) pair, loads
//!     the word list into all four, fans each password into eleven
//!     searches per table, and aggregates the verdict.
//!
//! Constraints
//! - Build-then-query lifecycle: tables are loaded once and never mutated
//!   afterward; no deletion, no resizing, no rehashing.
//! - Capacities are fixed at construction. The probing tables must be
//!   sized above the word count; `insert` refuses a full table and
//!   `search` bounds its scan, so nothing spins on a full table.
//! - Single-threaded, synchronous. `search` takes `&self` and returns its
//!   comparison count in the `Lookup` value, so shared read access would
//!   be sound; nothing in the crate exploits that.
//!
//! Instrumentation
//! - Every search reports the number of key comparisons it performed.
//!   The two hash variants are kept side by side precisely so these counts
//!   can be compared on identical data: the sampled hash trades hash cost
//!   on long keys for extra collisions, and the counts make that trade
//!   visible.
//!
//! Verdict semantics
//! - "Strong" means: at least 8 characters, and neither the password nor
//!   any single-digit-suffixed variant of it is in the full-scan-hash
//!   tables. The sampled-hash tables are searched and reported but do not
//!   gate the verdict; their role is diagnostic.
//!
//! Notes and non-goals
//! - No persistence, no concurrency, no cryptographic strength estimation.
//! - Ranks (1-based word-list positions) are stored as payload and
//!   retrievable, but never influence search or verdict.

mod chaining;
mod checker;
mod error;
mod hashing;
mod lookup;
mod probing;
pub mod wordlist;

// Public surface
pub use chaining::ChainingTable;
pub use checker::{
    StrengthChecker, StrengthReport, TableReport, CHAINING_CAPACITY, MIN_PASSWORD_LEN,
    PROBING_CAPACITY,
};
pub use error::DictError;
pub use hashing::BucketHash;
pub use lookup::Lookup;
pub use probing::ProbingTable;
