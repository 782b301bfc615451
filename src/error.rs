//! Error definitions.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum DictError {
    /// A probing table has no empty slot left. With a fixed capacity and no
    /// resizing, an insert into a full table can never succeed; callers must
    /// size the table above the expected word count up front.
    #[error("probing table is full (capacity {capacity})")]
    CapacityExhausted { capacity: usize },

    /// The word-list source could not be read. Fatal to the driver: no table
    /// is built from a partially read list.
    #[error("failed to read word list")]
    WordList(#[from] std::io::Error),
}
