/// SieveBuffer implements the growable primality table

use crate::error::SieveError;
use crate::sieve;
use crate::traits::PrimeTable;
use bitvec::order::Lsb0;
use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use log::{debug, trace};
use std::convert::TryFrom;
use std::ops::{Bound, RangeBounds};

/// A resizable primality table holding one bit per natural number.
///
/// The table starts empty and grows on demand; entries below the current
/// capacity are settled and never recomputed, so repeated queries with
/// increasing bounds only pay for the newly added range.
pub struct SieveBuffer {
    bits: BitVec, // bits[i] holds whether i is prime
}

impl SieveBuffer {
    #[inline]
    pub fn new() -> Self {
        SieveBuffer { bits: BitVec::new() }
    }

    /// Create a table with all of `[0, limit)` already sieved.
    pub fn with_capacity(limit: u64) -> Result<Self, SieveError> {
        let mut buffer = Self::new();
        buffer.ensure_capacity(limit)?;
        Ok(buffer)
    }
}

impl Default for SieveBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PrimeTable for SieveBuffer {
    #[inline]
    fn capacity(&self) -> u64 {
        self.bits.len() as u64
    }

    fn ensure_capacity(&mut self, limit: u64) -> Result<(), SieveError> {
        if limit <= self.capacity() {
            return Ok(());
        }
        // validate before touching the table, so a failed request leaves
        // every settled entry intact
        let new_len = match usize::try_from(limit) {
            Ok(len) if len <= BitSlice::<usize, Lsb0>::MAX_BITS => len,
            _ => return Err(SieveError::CapacityExceeded(limit)),
        };

        let old_len = self.bits.len();
        debug!("extending sieve table from {} to {} entries", old_len, new_len);
        self.bits.resize(new_len, true); // provisionally prime until struck
        sieve::extend(&mut self.bits, old_len, new_len);
        Ok(())
    }

    #[inline]
    fn get(&self, n: u64) -> Option<bool> {
        let idx = usize::try_from(n).ok()?;
        self.bits.get(idx).map(|bit| *bit)
    }

    fn primes_below(&self, limit: u64) -> Vec<u64> {
        let end = limit.min(self.capacity()) as usize; // clamped, so the cast is exact
        self.bits[..end].iter_ones().map(|i| i as u64).collect()
    }

    fn snapshot_below(&self, limit: u64) -> Vec<bool> {
        let end = limit.min(self.capacity()) as usize;
        self.bits[..end].iter().map(|bit| *bit).collect()
    }
}

/// Derived query operations over any [`PrimeTable`].
///
/// These are the stateless facade of the crate: every method grows the table
/// just far enough to answer, then reads it.
pub trait PrimeTableExt: PrimeTable {
    /// Return whether `n` is prime, growing the table as needed.
    ///
    /// This is the scalar fast path: a single bit is read and nothing is
    /// copied.
    fn is_prime(&mut self, n: u64) -> Result<bool, SieveError> {
        let wanted = n
            .checked_add(1)
            .ok_or(SieveError::CapacityExceeded(u64::MAX))?;
        self.ensure_capacity(wanted)?;
        Ok(self.get(n).unwrap_or(false))
    }

    /// All primes strictly below `limit`, ascending. Empty for `limit <= 2`.
    fn primes(&mut self, limit: u64) -> Result<Vec<u64>, SieveError> {
        self.ensure_capacity(limit)?;
        Ok(self.primes_below(limit))
    }

    /// Independent copy of the primality flags for `[0, limit)`.
    fn snapshot(&mut self, limit: u64) -> Result<Vec<bool>, SieveError> {
        self.ensure_capacity(limit)?;
        Ok(self.snapshot_below(limit))
    }

    /// The prime nearest to `n`, searching the whole number line.
    ///
    /// Equivalent to [`nearest_prime_within`](PrimeTableExt::nearest_prime_within)
    /// with an unbounded range; by Bertrand's postulate this always finds an
    /// answer, so `Ok(None)` is never returned.
    fn nearest_prime(&mut self, n: u64) -> Result<Option<u64>, SieveError> {
        self.nearest_prime_within(n, ..)
    }

    /// The prime nearest to `n` among candidates inside `range`.
    ///
    /// A prime `n` is always its own nearest prime, even when it lies outside
    /// `range`: the bounds steer the search for a *different* prime, they do
    /// not reject `n` itself. Otherwise the first prime above `n` and the
    /// first prime below `n` inside the range are compared by distance, and an
    /// exact tie goes to the lesser neighbor.
    ///
    /// With no upper bound the upward scan stops at twice its starting point
    /// (plus one); by Bertrand's postulate a prime exists below that ceiling,
    /// so the scan terminates. Callers wanting a tighter stop should supply a
    /// finite upper bound.
    ///
    /// Returns `Ok(None)` when the range contains no prime neighbor, and
    /// [`SieveError::EmptyRange`] when the range itself is empty.
    fn nearest_prime_within<R: RangeBounds<u64>>(
        &mut self,
        n: u64,
        range: R,
    ) -> Result<Option<u64>, SieveError> {
        let lo = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(&bound) => bound,
            Bound::Excluded(&bound) => bound
                .checked_add(1)
                .ok_or(SieveError::EmptyRange { min: u64::MAX, max: u64::MAX })?,
        };
        let hi = match range.end_bound() {
            Bound::Unbounded => None,
            Bound::Included(&bound) => Some(bound),
            Bound::Excluded(&bound) => match bound.checked_sub(1) {
                Some(h) => Some(h),
                None => return Err(SieveError::EmptyRange { min: lo, max: 0 }),
            },
        };
        if let Some(h) = hi {
            if lo > h {
                return Err(SieveError::EmptyRange { min: lo, max: h });
            }
        }

        if self.is_prime(n)? {
            return Ok(Some(n));
        }

        // upward from n (exclusive), clipped below by the range
        let start = lo.max(n + 1); // n + 1 cannot overflow: is_prime(n) succeeded
        let ceiling = match hi {
            Some(h) => h,
            None => {
                // Bertrand: a prime exists in (start, 2 * start) for start > 1
                let cap = start.saturating_mul(2).saturating_add(1).max(2);
                trace!("unbounded nearest-prime search for {} capped at {}", n, cap);
                cap
            }
        };
        let mut above = None;
        if start <= ceiling {
            for m in start..=ceiling {
                if self.is_prime(m)? {
                    above = Some(m);
                    break;
                }
            }
        }

        // downward from n (exclusive); candidates already lie in the settled
        // range, so these are plain bit reads
        let mut below = None;
        if n > 0 {
            let top = hi.map_or(n - 1, |h| h.min(n - 1));
            if lo <= top {
                for m in (lo..=top).rev() {
                    if m < 2 {
                        break;
                    }
                    if self.is_prime(m)? {
                        below = Some(m);
                        break;
                    }
                }
            }
        }

        Ok(match (below, above) {
            (None, None) => None,
            (Some(down), None) => Some(down),
            (None, Some(up)) => Some(up),
            // exact tie goes to the lesser neighbor
            (Some(down), Some(up)) => Some(if n - down <= up - n { down } else { up }),
        })
    }
}

impl<T: PrimeTable> PrimeTableExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIME50: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
    const PRIME100: [u64; 25] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97];

    fn is_prime_naive(n: u64) -> bool {
        n >= 2 && (2..n).all(|d| n % d != 0)
    }

    #[test]
    fn prime_generation_test() {
        let mut table = SieveBuffer::new();
        assert_eq!(table.primes(50).unwrap(), PRIME50);
        assert_eq!(table.primes(100).unwrap(), PRIME100);
        assert_eq!(table.primes(20).unwrap(), [2, 3, 5, 7, 11, 13, 17, 19]);
        assert!(table.primes(2).unwrap().is_empty());
        assert!(table.primes(0).unwrap().is_empty());
    }

    #[test]
    fn prime_assertion_test() {
        let mut table = SieveBuffer::new();
        assert!(!table.is_prime(0).unwrap());
        assert!(!table.is_prime(1).unwrap());
        assert!(table.is_prime(2).unwrap());
        for x in 0..100 {
            assert_eq!(PRIME100.contains(&x), table.is_prime(x).unwrap());
        }
    }

    #[test]
    fn oracle_agreement_test() {
        let mut table = SieveBuffer::new();
        for n in 0..1000 {
            assert_eq!(table.is_prime(n).unwrap(), is_prime_naive(n), "mismatch at {}", n);
        }

        // random spot checks against the trial-division oracle
        for _ in 0..50 {
            let n = rand::random::<u16>() as u64;
            assert_eq!(table.is_prime(n).unwrap(), is_prime_naive(n), "mismatch at {}", n);
        }
    }

    #[test]
    fn capacity_growth_test() {
        let mut table = SieveBuffer::new();
        assert_eq!(table.capacity(), 0);
        assert_eq!(table.get(5), None);

        table.ensure_capacity(100).unwrap();
        assert_eq!(table.capacity(), 100);
        assert_eq!(table.get(97), Some(true));

        // capacity never shrinks
        table.ensure_capacity(10).unwrap();
        assert_eq!(table.capacity(), 100);
    }

    #[test]
    fn idempotent_extension_test() {
        let mut table = SieveBuffer::new();
        table.ensure_capacity(64).unwrap();
        let first = table.snapshot(64).unwrap();
        table.ensure_capacity(64).unwrap();
        assert_eq!(table.snapshot(64).unwrap(), first);
    }

    #[test]
    fn monotonic_extension_test() {
        // growing the table never changes previously settled answers
        let mut grown = SieveBuffer::new();
        for limit in [10, 30, 100, 1000] {
            grown.ensure_capacity(limit).unwrap();
        }
        let mut scratch = SieveBuffer::with_capacity(1000).unwrap();
        assert_eq!(grown.snapshot(1000).unwrap(), scratch.snapshot(1000).unwrap());

        let prefix = scratch.snapshot(100).unwrap();
        assert_eq!(&grown.snapshot(1000).unwrap()[..100], &prefix[..]);
    }

    #[test]
    fn snapshot_independence_test() {
        let mut table = SieveBuffer::new();
        assert_eq!(table.snapshot(1).unwrap(), [false]);

        let mut copy = table.snapshot(10).unwrap();
        copy[7] = false;
        assert!(table.is_prime(7).unwrap());
        assert!(table.snapshot(10).unwrap()[7]);
    }

    #[test]
    fn nearest_prime_test() {
        let mut table = SieveBuffer::new();

        // a prime is its own nearest prime, bounds notwithstanding
        assert_eq!(table.nearest_prime(13).unwrap(), Some(13));
        assert_eq!(table.nearest_prime_within(13, 20..=30).unwrap(), Some(13));

        // 11 is closer to 10 than 7
        assert_eq!(table.nearest_prime(10).unwrap(), Some(11));
        // upward blocked by the bound, downward wins
        assert_eq!(table.nearest_prime_within(10, ..=10).unwrap(), Some(7));
        // equidistant neighbors: the lesser one wins
        assert_eq!(table.nearest_prime(9).unwrap(), Some(7));

        // bounds pinned to a primeless point
        assert_eq!(table.nearest_prime_within(8, 8..=8).unwrap(), None);
        // no prime lives in [24, 28]
        assert_eq!(table.nearest_prime_within(26, 24..=28).unwrap(), None);

        // range entirely above or below n
        assert_eq!(table.nearest_prime_within(5, 10..=20).unwrap(), Some(11));
        assert_eq!(table.nearest_prime_within(30, 2..=20).unwrap(), Some(19));
        // half-open range above n: the upward scan starts at the lower bound
        assert_eq!(table.nearest_prime_within(3, 100..).unwrap(), Some(101));

        // the bottom of the number line
        assert_eq!(table.nearest_prime(0).unwrap(), Some(2));
        assert_eq!(table.nearest_prime(1).unwrap(), Some(2));
    }

    #[test]
    fn empty_range_test() {
        let mut table = SieveBuffer::new();
        assert_eq!(
            table.nearest_prime_within(5, 10..=2),
            Err(SieveError::EmptyRange { min: 10, max: 2 })
        );
        assert!(matches!(
            table.nearest_prime_within(5, 4..0),
            Err(SieveError::EmptyRange { .. })
        ));
    }

    #[test]
    fn capacity_exceeded_test() {
        let mut table = SieveBuffer::new();
        assert_eq!(
            table.is_prime(u64::MAX),
            Err(SieveError::CapacityExceeded(u64::MAX))
        );
        assert!(table.ensure_capacity(u64::MAX).is_err());
        // the failed requests left the table untouched
        assert_eq!(table.capacity(), 0);
    }
}
