//! Per-call search outcome.

/// Result of one `search` call on either table kind.
///
/// The comparison count is part of the return value rather than instance
/// state, so a table can serve many readers with no ordering hazard between
/// a search and the read of its cost.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Lookup {
    /// Whether a node or occupied slot with an equal key was found.
    pub found: bool,
    /// Number of key-equality checks performed, one per chain node or
    /// occupied slot visited. At least 1 on a successful search; 0 when the
    /// bucket or home slot was empty.
    pub comparisons: usize,
}
