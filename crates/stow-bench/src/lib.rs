//! Benchmark profiles and input generators for Stow.
//!
//! - [`sample_i64`]: deterministic integer inputs via seed
//! - [`sample_words`]: deterministic string inputs via seed
//! - [`build_all`]: append a batch into a builder and finalize it

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::any::Any;

use stow_builder::{GrowableBuilder, Snapshot};

/// Element counts used across the benchmark groups.
pub const SIZES: [usize; 4] = [16, 1_000, 10_000, 100_000];

fn lcg(state: u64) -> u64 {
    state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

/// Generate `n` deterministic pseudo-random integers from `seed`.
pub fn sample_i64(n: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = lcg(state);
            state as i64
        })
        .collect()
}

/// Generate `n` deterministic short strings from `seed`.
pub fn sample_words(n: usize, seed: u64) -> Vec<String> {
    sample_i64(n, seed)
        .into_iter()
        .map(|v| format!("w{:x}", v as u64 % 0xffff))
        .collect()
}

/// Append every value to `builder` and finalize.
pub fn build_all<T, I>(builder: &mut GrowableBuilder<T>, values: I) -> Snapshot<T>
where
    T: Any + Send + Sync,
    I: IntoIterator<Item = T>,
{
    for v in values {
        builder.append(v);
    }
    builder.finalize()
}
