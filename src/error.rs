//! The unified error type for table growth and query operations.

use thiserror::Error;

/// Errors surfaced by the sieve table and its queries.
///
/// A nearest-prime search that finds no candidate is not an error; the query
/// reports it as `Ok(None)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveError {
    /// The input cannot be interpreted as a natural number.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A nearest-prime search range whose lower bound lies above its upper bound.
    #[error("empty search range: lower bound {min} exceeds upper bound {max}")]
    EmptyRange { min: u64, max: u64 },

    /// The requested table size cannot be addressed by the backing storage.
    /// The table is left untouched at its previous capacity.
    #[error("requested table capacity {0} exceeds the addressable limit")]
    CapacityExceeded(u64),
}
