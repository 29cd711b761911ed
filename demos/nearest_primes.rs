use num_sieve::{nearest_prime, nearest_prime_within, SieveError};

fn main() -> Result<(), SieveError> {
    // Primes closest to each power of ten
    for exp in 0..7u32 {
        let n = 10u64.pow(exp);
        if let Some(p) = nearest_prime(n)? {
            println!("nearest prime to 10^{}: {}", exp, p);
        }
    }

    // A bounded search can come up empty: no prime lives in [24, 28]
    let answer = nearest_prime_within(26u64, 24..=28)?;
    println!("nearest prime to 26 within [24, 28]: {:?}", answer);

    Ok(())
}
