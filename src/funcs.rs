//! Standalone query functions backed by one process-wide sieve table.
//!
//! Primality is a pure function of its argument, so these entry points share
//! a single table for the lifetime of the process; repeated queries with
//! growing bounds never redo settled work. For an explicitly owned table use
//! [`SieveBuffer`](crate::SieveBuffer) or [`SharedSieve`](crate::SharedSieve)
//! directly.
//!
//! The functions are generic over primitive integers. Inputs that cannot be
//! interpreted as a natural number (negative values) are rejected with
//! [`SieveError::InvalidArgument`], never silently coerced.

use crate::error::SieveError;
use crate::shared::SharedSieve;
use num_traits::{PrimInt, ToPrimitive};
use once_cell::sync::Lazy;
use std::ops::RangeBounds;

static TABLE: Lazy<SharedSieve> = Lazy::new(SharedSieve::new);

#[inline]
fn to_index<N: PrimInt + ToPrimitive>(n: N, what: &'static str) -> Result<u64, SieveError> {
    n.to_u64().ok_or(SieveError::InvalidArgument(what))
}

/// Return whether `n` is prime.
pub fn is_prime<N: PrimInt>(n: N) -> Result<bool, SieveError> {
    TABLE.is_prime(to_index(n, "primality query on a negative number")?)
}

/// All primes strictly below `limit`, ascending.
pub fn primes<N: PrimInt>(limit: N) -> Result<Vec<u64>, SieveError> {
    TABLE.primes(to_index(limit, "prime listing with a negative bound")?)
}

/// The prime nearest to `n`, with exact ties going to the lesser neighbor.
pub fn nearest_prime<N: PrimInt>(n: N) -> Result<Option<u64>, SieveError> {
    TABLE.nearest_prime(to_index(n, "nearest-prime query on a negative number")?)
}

/// The prime nearest to `n` among candidates inside `range`; see
/// [`PrimeTableExt::nearest_prime_within`](crate::PrimeTableExt::nearest_prime_within)
/// for the full contract.
pub fn nearest_prime_within<N: PrimInt, R: RangeBounds<u64>>(
    n: N,
    range: R,
) -> Result<Option<u64>, SieveError> {
    TABLE.nearest_prime_within(to_index(n, "nearest-prime query on a negative number")?, range)
}

/// Independent copy of the first `limit` primality flags, for diagnostic and
/// export use.
pub fn sieve<N: PrimInt>(limit: N) -> Result<Vec<bool>, SieveError> {
    TABLE.snapshot(to_index(limit, "sieve export with a negative bound")?)
}
