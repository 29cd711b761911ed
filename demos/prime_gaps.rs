use num_sieve::{primes, SieveError};

/// Find the record-setting gaps between consecutive primes below the limit.
/// Reference: <https://en.wikipedia.org/wiki/Prime_gap>
fn list_record_gaps(limit: u64) -> Result<Vec<(u64, u64)>, SieveError> {
    let mut records = Vec::new();
    let mut best = 0;
    for pair in primes(limit)?.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > best {
            best = gap;
            records.push((pair[0], gap));
        }
    }
    Ok(records)
}

fn main() -> Result<(), SieveError> {
    for (start, gap) in list_record_gaps(100_000)? {
        println!("gap of {:>3} after {}", gap, start);
    }
    Ok(())
}
