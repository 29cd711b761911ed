use crate::error::SieveError;

/// Abstraction over a growable primality table.
///
/// Implementors guarantee that every index below [`capacity`](PrimeTable::capacity)
/// is settled: the stored flag is the ground-truth primality of that index and
/// never changes once decided. Capacity grows monotonically and is never shrunk.
pub trait PrimeTable {
    /// Number of consecutive entries, starting from 0, whose primality is known.
    fn capacity(&self) -> u64;

    /// Grow the table until all of `[0, limit)` is settled.
    ///
    /// A no-op when the table already covers the range. On error the table is
    /// left at its previous capacity with every prior entry intact.
    fn ensure_capacity(&mut self, limit: u64) -> Result<(), SieveError>;

    /// Primality of `n`, or `None` when `n` lies beyond the settled range.
    fn get(&self, n: u64) -> Option<bool>;

    /// Ascending primes strictly below `limit`.
    ///
    /// Only the settled range is consulted; any portion of `[0, limit)` beyond
    /// the current capacity is ignored.
    fn primes_below(&self, limit: u64) -> Vec<u64>;

    /// Independent copy of the first `limit` entries, truncated to the settled
    /// range. Mutating the copy never affects the table.
    fn snapshot_below(&self, limit: u64) -> Vec<bool>;
}
