//! Provides a set of integer list patterns, used as CLI input, for testing and for benchmarking.
//! All patterns draw from one per-process seed, see [`random_init_seed`].

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

/// Uniformly distributed values in `range`, eg. `-10..=10`.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    random_uniform_with_seed(len, range, random_init_seed())
}

/// Same as [`random_uniform`] but generated from `seed`, so a logged seed reproduces the list.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn random_uniform_with_seed<R>(len: usize, range: R, seed: u64) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = StdRng::seed_from_u64(seed);

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort_unstable();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunks_size) {
        chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunks_size).zip(saw_directions) {
        if direction == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Overwrites the default behavior so that each call to a random derived pattern yields new random
/// values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// For benchmarks and one-shot generation it's advised to call this function.
pub fn use_random_seed_each_time() {
    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

/// The seed the next pattern will be generated from.
///
/// `OVERRIDE_SEED=<u64>` in the environment pins it, even over [`use_random_seed_each_time`].
/// Otherwise it is picked once per process.
pub fn random_init_seed() -> u64 {
    let (seed_type, seed) = *SEED_TYPE_AND_VALUE.get_or_init(|| {
        match env::var("OVERRIDE_SEED").map(|seed| seed.trim().parse::<u64>()) {
            Ok(Ok(seed)) => (SeedType::ExternalOverride, seed),
            Ok(Err(err)) => {
                tracing::warn!(%err, "ignoring invalid OVERRIDE_SEED");
                (SeedType::RandomOncePerProcess, thread_rng().gen())
            }
            Err(_) => (SeedType::RandomOncePerProcess, thread_rng().gen()),
        }
    });

    if seed_type != SeedType::ExternalOverride && RANDOM_EACH_TIME.load(Ordering::Acquire) {
        thread_rng().gen()
    } else {
        seed
    }
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: OnceCell<(SeedType, u64)> = OnceCell::new();
static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn new_rng() -> StdRng {
    // Random seed, but callers can print it for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}
