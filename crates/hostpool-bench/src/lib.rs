//! Benchmark profiles and utilities for hostpool.
//!
//! Provides pre-built pools and identifier sequences for benchmarking:
//!
//! - [`reference_pool`]: an IPv4 /16 worth of hosts (65534), fully free
//! - [`fragmented_profile`]: every other host allocated, worst-case interval count
//! - [`churn_sequence`]: deterministic pseudo-random identifiers via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hostpool::{ConfigError, RangePool};

/// Host numbers in a /16.
pub const REFERENCE_UPPER_BOUND: u32 = 65_534;

/// Build the reference benchmark pool: `[1, 65534]`, all free.
pub fn reference_pool() -> Result<RangePool, ConfigError> {
    RangePool::new(REFERENCE_UPPER_BOUND)
}

/// Build a maximally fragmented pool: every odd identifier allocated, so the
/// free list holds `upper_bound / 2` singleton intervals.
pub fn fragmented_profile(upper_bound: u32) -> Result<RangePool, ConfigError> {
    let mut pool = RangePool::new(upper_bound)?;
    for num in (1..=upper_bound).step_by(2) {
        pool.allocate(num);
    }
    Ok(pool)
}

/// Generate `len` deterministic identifiers in `[1, upper_bound]`.
///
/// Uses a simple multiplicative hash of the seed; duplicates are allowed so
/// that replaying the sequence exercises both hits and misses.
pub fn churn_sequence(upper_bound: u32, len: usize, seed: u64) -> Vec<u32> {
    let modulus = u64::from(upper_bound.max(1));
    (0..len as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            ((h >> 17) % modulus) as u32 + 1
        })
        .collect()
}
