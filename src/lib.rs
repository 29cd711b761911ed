//! Primality queries over growable ranges of natural numbers, backed by an
//! incrementally extensible Sieve of Eratosthenes.
//!
//! The crate answers "is N prime?", "which primes lie below N?" and "which
//! prime is nearest to N within bounds?" efficiently across repeated calls
//! with increasing N: the backing table grows on demand and never recomputes
//! previously settled entries.
//!
//! The simplest entry points are the free functions, which share one table
//! for the lifetime of the process:
//!
//! ```
//! assert_eq!(num_sieve::primes(20)?, vec![2, 3, 5, 7, 11, 13, 17, 19]);
//! assert_eq!(num_sieve::nearest_prime(10)?, Some(11));
//! # Ok::<(), num_sieve::SieveError>(())
//! ```
//!
//! For an explicitly owned table use [`SieveBuffer`] (single-threaded) or
//! [`SharedSieve`] (a cloneable handle with an internal read-write lock).

mod buffer;
mod error;
mod funcs;
mod shared;
mod sieve;
mod traits;

pub use buffer::{PrimeTableExt, SieveBuffer};
pub use error::SieveError;
pub use funcs::{is_prime, nearest_prime, nearest_prime_within, primes, sieve};
pub use shared::SharedSieve;
pub use traits::PrimeTable;

pub mod detail {
    pub use super::sieve::extend;
}
