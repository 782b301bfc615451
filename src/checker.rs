//! Password strength checking over four table instances.
//!
//! The checker owns one table per (strategy, hash) combination — chaining
//! and probing, each under the sampled and the full-scan hash — loads the
//! same word list into all four, and fans each password query out into
//! eleven searches per table: the password verbatim plus the ten variants
//! with a single digit appended. The per-table `found` answer is the OR of
//! the eleven searches; the reported comparison count is the verbatim
//! query's, which is the interesting one for comparing the two hashes.
//!
//! Only the full-scan tables gate the verdict. The sampled-hash tables are
//! loaded and searched all the same, but their findings are diagnostic:
//! they exist to measure what the lossy hash costs in collisions, not to
//! decide strength. This asymmetry is deliberate.

use crate::chaining::ChainingTable;
use crate::error::DictError;
use crate::hashing::BucketHash;
use crate::lookup::Lookup;
use crate::probing::ProbingTable;

/// Default bucket count for the chaining tables.
pub const CHAINING_CAPACITY: usize = 1000;
/// Default slot count for the probing tables. Must stay comfortably above
/// the word count: probing has no resize and degrades near full load.
pub const PROBING_CAPACITY: usize = 20_000;
/// Passwords shorter than this are weak regardless of table results.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Aggregated result for one table instance: `found` is the OR over the
/// verbatim password and its ten digit-suffixed variants; `comparisons` is
/// the cost of the verbatim search alone.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableReport {
    pub found: bool,
    pub comparisons: usize,
}

/// Verdict and per-table diagnostics for one password.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrengthReport {
    /// Whether the password meets the minimum length.
    pub length_ok: bool,
    /// `length_ok` and not found in either full-scan table. Sampled-table
    /// findings do not participate.
    pub strong: bool,
    pub chaining_sampled: TableReport,
    pub chaining_full: TableReport,
    pub probing_sampled: TableReport,
    pub probing_full: TableReport,
}

/// Dictionary-lookup engine: four fixed-capacity tables built once from a
/// word list, then queried per password.
pub struct StrengthChecker {
    chaining_sampled: ChainingTable,
    chaining_full: ChainingTable,
    probing_sampled: ProbingTable,
    probing_full: ProbingTable,
    words: u32,
}

impl StrengthChecker {
    /// Checker with the default capacities (1000 buckets / 20000 slots).
    pub fn new() -> Self {
        Self::with_capacities(CHAINING_CAPACITY, PROBING_CAPACITY)
    }

    /// Checker with explicit capacities, both at least 1. The probing
    /// capacity bounds how many words [`load`](Self::load) can accept.
    pub fn with_capacities(chaining: usize, probing: usize) -> Self {
        Self {
            chaining_sampled: ChainingTable::new(chaining),
            chaining_full: ChainingTable::new(chaining),
            probing_sampled: ProbingTable::new(probing),
            probing_full: ProbingTable::new(probing),
            words: 0,
        }
    }

    /// Insert every word into all four tables, assigning 1-based ranks in
    /// iteration order (continuing from any previous load).
    ///
    /// Fails with [`DictError::CapacityExhausted`] once a probing table is
    /// full; words up to that point remain inserted, but the driver treats
    /// a failed load as fatal rather than querying a partial dictionary.
    pub fn load<I, S>(&mut self, words: I) -> Result<(), DictError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            let rank = self.words + 1;
            self.chaining_sampled.insert(word, rank, BucketHash::Sampled);
            self.chaining_full.insert(word, rank, BucketHash::FullScan);
            self.probing_sampled.insert(word, rank, BucketHash::Sampled)?;
            self.probing_full.insert(word, rank, BucketHash::FullScan)?;
            self.words = rank;
        }
        Ok(())
    }

    /// Number of words loaded so far.
    pub fn word_count(&self) -> usize {
        self.words as usize
    }

    /// Check one password against all four tables.
    ///
    /// Verbatim query first (its comparison count is the one reported),
    /// then the ten digit-suffixed variants `password + '0'..='9'`.
    pub fn check(&self, password: &str) -> StrengthReport {
        let length_ok = password.chars().count() >= MIN_PASSWORD_LEN;

        let mut chaining_sampled =
            report_from(self.chaining_sampled.search(password, BucketHash::Sampled));
        let mut chaining_full =
            report_from(self.chaining_full.search(password, BucketHash::FullScan));
        let mut probing_sampled =
            report_from(self.probing_sampled.search(password, BucketHash::Sampled));
        let mut probing_full =
            report_from(self.probing_full.search(password, BucketHash::FullScan));

        for digit in '0'..='9' {
            let variant = format!("{password}{digit}");
            chaining_sampled.found |= self
                .chaining_sampled
                .search(&variant, BucketHash::Sampled)
                .found;
            chaining_full.found |= self
                .chaining_full
                .search(&variant, BucketHash::FullScan)
                .found;
            probing_sampled.found |= self
                .probing_sampled
                .search(&variant, BucketHash::Sampled)
                .found;
            probing_full.found |= self
                .probing_full
                .search(&variant, BucketHash::FullScan)
                .found;
        }

        let strong = length_ok && !chaining_full.found && !probing_full.found;
        StrengthReport {
            length_ok,
            strong,
            chaining_sampled,
            chaining_full,
            probing_sampled,
            probing_full,
        }
    }
}

impl Default for StrengthChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn report_from(lookup: Lookup) -> TableReport {
    TableReport {
        found: lookup.found,
        comparisons: lookup.comparisons,
    }
}
