//! Random Source Construction
//!
//! Search code never reads the clock itself: callers build a seeded
//! generator here and pass it in.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed derived from the current wall-clock time in nanoseconds
pub fn clock_seed() -> u64 {
    let now = Utc::now();
    // Nanosecond timestamps overflow i64 in 2262; fall back to microseconds.
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros());
    nanos as u64
}

/// Deterministic generator for a given seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = seeded_rng(1);
        let mut b = seeded_rng(2);
        let first_a: [u64; 4] = std::array::from_fn(|_| a.random());
        let first_b: [u64; 4] = std::array::from_fn(|_| b.random());
        assert_ne!(first_a, first_b);
    }

    #[test]
    fn test_clock_seed_is_nonzero() {
        assert_ne!(clock_seed(), 0);
    }
}
