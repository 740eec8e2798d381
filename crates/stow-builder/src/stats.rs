//! Allocation counters for a single builder.

/// Cumulative counts of the storage work a builder has done.
///
/// Counters only grow; they survive `clear` and `finalize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuilderStats {
    /// Storage allocations made for growth or `size_hint`.
    pub allocations: u64,
    /// `finalize` calls that moved the storage out without copying.
    pub transfers: u64,
    /// `finalize` calls that copied pending elements into new storage.
    pub copies: u64,
    /// `finalize` calls that returned the cached empty instance.
    pub empty_results: u64,
}

impl BuilderStats {
    /// Total number of `finalize` calls.
    pub fn finalizations(&self) -> u64 {
        self.transfers + self.copies + self.empty_results
    }
}
