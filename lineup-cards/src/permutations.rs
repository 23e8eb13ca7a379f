use crate::types::Permutation;
use rand::seq::SliceRandom;
use rand::Rng;

/// `n!`, or `None` when it does not fit in a `u128` (n > 34).
pub fn factorial(n: usize) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// Number of permutations a run actually produces: `min(requested, n!)`.
pub fn effective_count(n: usize, requested: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    match factorial(n) {
        Some(limit) if limit < requested as u128 => limit as u64,
        _ => requested,
    }
}

pub fn generate(n: usize, requested: u64) -> Vec<Permutation> {
    generate_with_rng(n, requested, &mut rand::thread_rng())
}

/// Draw `effective_count(n, requested)` independent shuffles of `0..n`.
///
/// Shuffles are not deduplicated, so fewer than `n!` distinct
/// arrangements may come back even when `requested >= n!`.
pub fn generate_with_rng<R: Rng + ?Sized>(n: usize, requested: u64, rng: &mut R) -> Vec<Permutation> {
    (0..effective_count(n, requested))
        .map(|_| {
            let mut permutation: Permutation = (0..n).collect();
            permutation.shuffle(rng);
            permutation
        })
        .collect()
}
