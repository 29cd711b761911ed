//! A cloneable, lock-guarded handle around [`SieveBuffer`].

use crate::buffer::{PrimeTableExt, SieveBuffer};
use crate::error::SieveError;
use crate::traits::PrimeTable;
use parking_lot::RwLock;
use std::ops::RangeBounds;
use std::sync::Arc;

/// A thread-safe handle to a single growing primality table.
///
/// All clones address the same table. Extension takes the write lock, so at
/// most one extension is in flight at a time and readers never observe a
/// partially sieved range; settled entries are immutable once written, and
/// queries over them contend only on the read lock.
#[derive(Clone, Default)]
pub struct SharedSieve {
    inner: Arc<RwLock<SieveBuffer>>,
}

impl SharedSieve {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle whose table already covers `[0, limit)`.
    pub fn with_capacity(limit: u64) -> Result<Self, SieveError> {
        let sieve = Self::new();
        sieve.ensure_capacity(limit)?;
        Ok(sieve)
    }

    pub fn capacity(&self) -> u64 {
        self.inner.read().capacity()
    }

    /// Grow the table so all of `[0, limit)` is settled.
    ///
    /// Double-checked: racing growers serialize on the write lock and the
    /// losers find the work already done when they re-check under it.
    pub fn ensure_capacity(&self, limit: u64) -> Result<(), SieveError> {
        if self.inner.read().capacity() >= limit {
            return Ok(());
        }
        self.inner.write().ensure_capacity(limit)
    }

    /// Return whether `n` is prime, growing the table as needed.
    pub fn is_prime(&self, n: u64) -> Result<bool, SieveError> {
        if let Some(known) = self.inner.read().get(n) {
            return Ok(known);
        }
        self.inner.write().is_prime(n)
    }

    /// All primes strictly below `limit`, ascending.
    pub fn primes(&self, limit: u64) -> Result<Vec<u64>, SieveError> {
        self.ensure_capacity(limit)?;
        Ok(self.inner.read().primes_below(limit))
    }

    /// Independent copy of the primality flags for `[0, limit)`.
    pub fn snapshot(&self, limit: u64) -> Result<Vec<bool>, SieveError> {
        self.ensure_capacity(limit)?;
        Ok(self.inner.read().snapshot_below(limit))
    }

    /// The prime nearest to `n`; see [`PrimeTableExt::nearest_prime`].
    pub fn nearest_prime(&self, n: u64) -> Result<Option<u64>, SieveError> {
        self.inner.write().nearest_prime(n)
    }

    /// The prime nearest to `n` inside `range`; see
    /// [`PrimeTableExt::nearest_prime_within`].
    pub fn nearest_prime_within<R: RangeBounds<u64>>(
        &self,
        n: u64,
        range: R,
    ) -> Result<Option<u64>, SieveError> {
        self.inner.write().nearest_prime_within(n, range)
    }
}
