//! The incremental Sieve of Eratosthenes marking pass.
//!
//! [`extend`] is the algorithmic kernel of the crate: it upgrades a table that
//! is correct for `[0, old_len)` into one correct for `[0, new_len)` without
//! revisiting entries that are already settled.

use bitvec::slice::BitSlice;

/// Mark composites in `bits[old_len..new_len)`.
///
/// Contract: `bits[0..old_len)` already holds correct primality flags and the
/// entries in `bits[old_len..new_len)` are freshly initialized to `true`. On
/// return every index below `new_len` holds `true` iff it is prime.
///
/// For each sieving prime `p` the marking starts at `p * p` when that square
/// lies inside the new range, keeping the classical quadratic skip; for small
/// primes whose square is below `old_len` it starts at the first multiple of
/// `p` at or above `old_len`, so composites newly in range are never missed.
/// Candidates in `[old_len, new_len)` are read only after every smaller prime
/// has struck its multiples, which makes repeated calls with strictly
/// increasing `new_len` settle each index exactly once.
pub fn extend(bits: &mut BitSlice, old_len: usize, new_len: usize) {
    if new_len <= old_len {
        return;
    }

    // 0 and 1 are non-prime by definition, not by marking.
    for i in old_len..new_len.min(2) {
        bits.set(i, false);
    }
    if new_len <= 2 {
        return;
    }

    let root = num_integer::sqrt(new_len - 1);
    for p in 2..=root {
        if !bits[p] {
            continue;
        }
        let start = first_multiple_from(p, old_len).max(p * p);
        for multiple in (start..new_len).step_by(p) {
            bits.set(multiple, false);
        }
    }
}

/// Smallest multiple of `p` at or above `floor`.
#[inline]
fn first_multiple_from(p: usize, floor: usize) -> usize {
    match floor % p {
        0 => floor,
        rem => floor + (p - rem),
    }
}
