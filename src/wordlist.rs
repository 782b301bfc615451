//! Word-list ingestion.
//!
//! One word per line, trimmed; empty lines are skipped. Line order defines
//! the 1-based rank the checker stores with each word. A read failure is
//! fatal to the caller: no tables are built from a partially read list.

use crate::error::DictError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read trimmed, non-empty words from `reader`, in order.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, DictError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Read a word list from a file.
pub fn read_words_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictError> {
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}
