//! Input patterns for testing and benchmarking the algorithms, currently limited to `i32` values.
//!
//! All randomness is derived from one process-wide seed, see [`random_init_seed`], so a failing
//! run can be reproduced from the printed seed.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = seeded_rng();
    (0..size).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = seeded_rng();
    let dist: Uniform<i32> = range.into();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_duplicates(size: usize) -> Vec<i32> {
    // .:.:..:.
    // ::::::::
    // Roughly sqrt(size) distinct values, each repeated many times.

    let distinct = ((size as f64).sqrt() as i32).max(1);
    random_uniform(size, 0..distinct)
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect()
}

pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    let mut vals = random(size);
    for chunk in vals.chunks_mut(chunk_len(size, saw_count)) {
        chunk.sort_unstable();
    }
    vals
}

pub fn descending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    let mut vals = random(size);
    for chunk in vals.chunks_mut(chunk_len(size, saw_count)) {
        chunk.sort_unstable_by(|a, b| b.cmp(a));
    }
    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(size);
    let (first_half, second_half) = vals.split_at_mut(size / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by(|a, b| b.cmp(a));
    vals
}

/// Two independently sorted runs of random values, split at the returned index. The split point
/// is random as well and may be `0` or `size`.
pub fn sorted_runs(size: usize) -> (Vec<i32>, usize) {
    //    .:   .:
    // ..:::.:::
    //      ^

    let mut rng = seeded_rng();
    let middle = rng.gen_range(0..=size);

    // Few distinct values so both runs share keys.
    let dist = Uniform::new_inclusive(0, (size as i32 / 4).max(1));
    let mut vals: Vec<i32> = (0..size).map(|_| dist.sample(&mut rng)).collect();

    let (left, right) = vals.split_at_mut(middle);
    left.sort_unstable();
    right.sort_unstable();

    (vals, middle)
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every following call draw a fresh seed instead of reusing the process-wide one.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed all patterns derive their randomness from. Fixed for the lifetime of the process
/// unless [`disable_fixed_seed`] was called.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

/// A generator seeded from [`random_init_seed`].
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Private ---

fn chunk_len(size: usize, saw_count: usize) -> usize {
    // `chunks_mut` rejects a chunk size of zero.
    (size / saw_count.max(1)).max(1)
}
