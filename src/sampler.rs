//! Seedable uniform permutation and subsampling primitives.
//!
//! All randomness in this crate flows through this module: the engines
//! never touch an ambient global generator, so tests can inject a seed and
//! replicate loops can derive one independent generator per replicate.
//!
//! Replicate substreams use counter-based seeding: the master seed and the
//! replicate index are mixed through a SplitMix64 finalizer, giving
//! well-distributed, deterministic per-replicate seeds that are independent
//! of execution order. This is what makes the optional parallel replicate
//! path bit-identical to the sequential one.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Error, Result};

/// Construct a generator from an optional seed.
///
/// `Some(seed)` produces a deterministic generator; `None` seeds from
/// process entropy.
pub fn rng_from_seed(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(s) => Xoshiro256PlusPlus::seed_from_u64(s),
        None => Xoshiro256PlusPlus::from_entropy(),
    }
}

/// Resolve an optional caller seed into a concrete master seed.
///
/// When the caller did not provide one, a single value is drawn from
/// process entropy; all replicate substreams then derive from it, so even
/// unseeded runs use one coherent stream family.
pub fn master_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => s,
        None => Xoshiro256PlusPlus::from_entropy().next_u64(),
    }
}

/// Derive a per-replicate seed from a master seed and a replicate counter.
///
/// Mixes both inputs through a SplitMix64 finalizer so that consecutive
/// counters map to well-separated seeds.
pub fn counter_rng_seed(master: u64, counter: u64) -> u64 {
    let mut z = master
        .wrapping_add(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(counter.wrapping_mul(0xBF58_476D_1CE4_E5B9));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Return a uniformly random reordering of `seq`.
///
/// Length is preserved exactly and every one of the n! orderings is equally
/// likely (Fisher-Yates shuffle).
pub fn permuted<T: Clone, R: Rng>(rng: &mut R, seq: &[T]) -> Vec<T> {
    let mut out = seq.to_vec();
    out.shuffle(rng);
    out
}

/// Draw `k` elements from `seq` without replacement.
///
/// Uniform over all C(n, k) subsets and over all orderings of the drawn
/// subset (partial Fisher-Yates).
///
/// # Errors
///
/// Returns [`Error::SubsampleTooLarge`] when `k > seq.len()`.
pub fn subsample<T: Clone, R: Rng>(rng: &mut R, seq: &[T], k: usize) -> Result<Vec<T>> {
    if k > seq.len() {
        return Err(Error::SubsampleTooLarge { k, n: seq.len() });
    }
    Ok(subsample_unchecked(rng, seq, k))
}

/// Draw `k <= seq.len()` elements without replacement.
///
/// Callers must have established `k <= seq.len()`.
pub(crate) fn subsample_unchecked<T: Clone, R: Rng>(rng: &mut R, seq: &[T], k: usize) -> Vec<T> {
    debug_assert!(k <= seq.len());
    let mut work = seq.to_vec();
    let (picked, _) = work.partial_shuffle(rng, k);
    picked.to_vec()
}

/// Draw one element uniformly at random.
///
/// Equivalent to `subsample(rng, seq, 1)` for a non-empty sequence.
///
/// # Panics
///
/// Panics if `seq` is empty.
pub(crate) fn choose_one<T: Copy, R: Rng>(rng: &mut R, seq: &[T]) -> T {
    assert!(!seq.is_empty(), "cannot choose from an empty sequence");
    seq[rng.gen_range(0..seq.len())]
}
