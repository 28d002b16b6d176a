//! Deterministic input pattern generators.
//!
//! All randomness flows from one seed, taken from `OVERRIDE_SEED` if set and
//! otherwise drawn once per process. The seed is printed so a failing run
//! can be replayed exactly.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::distributions::Distribution;
use rand::prelude::*;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|var| var.parse().ok())
        .unwrap_or_else(|| thread_rng().gen());

    eprintln!("pattern seed: {seed}");
    seed
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Lengths the randomized tests run at. `large_test_sizes` extends the
/// ladder into six figures.
pub fn test_sizes() -> Vec<usize> {
    let mut sizes = vec![
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 16, 20, 24, 33, 50, 100, 200, 500, 1_000, 2_000,
        4_096, 10_000,
    ];

    if cfg!(feature = "large_test_sizes") {
        sizes.extend([100_000, 250_000]);
    }

    sizes
}

/// Fully random values over the whole `i32` domain.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Random values drawn uniformly from `range`, i.e. with many duplicates
/// once `len` exceeds the range size.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian-distributed values, a few of them very common and a long tail of
/// rare ones.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// `0..len`, already sorted.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// `0..len` reversed, i.e. strictly descending.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// A single repeated value.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Concatenation of short ascending and descending runs of random lengths,
/// the nearly-sorted shape adaptive sorts care about.
pub fn saw_mixed(len: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let mut v = ascending(len);

    let average_run = (len / 8).max(2);
    let mut start = 0;
    while start < len {
        let run_len = rng.gen_range(1..=average_run).min(len - start);
        if rng.gen::<bool>() {
            v[start..start + run_len].reverse();
        }
        start += run_len;
    }

    v
}
