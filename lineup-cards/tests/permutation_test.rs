use lineup_cards::permutations::{effective_count, factorial, generate, generate_with_rng};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_arrangement(permutation: &[usize], n: usize) {
    let mut sorted = permutation.to_vec();
    sorted.sort_unstable();
    assert_eq!(
        sorted,
        (0..n).collect::<Vec<_>>(),
        "{:?} is not an arrangement of 0..{}",
        permutation,
        n
    );
}

#[test]
fn test_factorial_values() {
    assert_eq!(factorial(0), Some(1));
    assert_eq!(factorial(1), Some(1));
    assert_eq!(factorial(3), Some(6));
    assert_eq!(factorial(10), Some(3_628_800));
    assert_eq!(factorial(34).map(|f| f > u64::MAX as u128), Some(true));
    assert_eq!(factorial(35), None, "35! does not fit in a u128");
}

#[test]
fn test_count_is_capped_by_factorial() {
    for n in 1..=6usize {
        for requested in [1u64, 2, 5, 10, 100, 1000] {
            let expected = requested.min(factorial(n).unwrap() as u64);
            let permutations = generate(n, requested);
            assert_eq!(
                permutations.len() as u64,
                expected,
                "n = {}, requested = {}",
                n,
                requested
            );
            for permutation in &permutations {
                assert_arrangement(permutation, n);
            }
        }
    }
}

#[test]
fn test_large_lineup_is_not_capped() {
    assert_eq!(effective_count(40, u64::MAX), u64::MAX);
    assert_eq!(effective_count(21, 10), 10);
    assert_eq!(generate(40, 3).len(), 3);
}

#[test]
fn test_single_speaker_always_gets_slot_one() {
    assert_eq!(generate(1, 10), vec![vec![0]]);
    assert_eq!(generate(1, 1), vec![vec![0]]);
}

#[test]
fn test_zero_speakers_produce_nothing() {
    assert_eq!(effective_count(0, 10), 0);
    assert!(generate(0, 10).is_empty());
}

#[test]
fn test_zero_requested_produce_nothing() {
    assert!(generate(4, 0).is_empty());
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let first = generate_with_rng(5, 20, &mut StdRng::seed_from_u64(42));
    let second = generate_with_rng(5, 20, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
    assert_eq!(first.len(), 20);
}

#[test]
fn test_shuffles_are_not_deduplicated() {
    // With 2 speakers and many draws, independent shuffles repeat; the
    // generator returns them as drawn instead of collapsing them.
    let mut rng = StdRng::seed_from_u64(7);
    let permutations: Vec<_> = (0..50)
        .flat_map(|_| generate_with_rng(2, 2, &mut rng))
        .collect();
    assert_eq!(permutations.len(), 100);

    let batches_with_repeat = permutations
        .chunks(2)
        .filter(|batch| batch[0] == batch[1])
        .count();
    assert!(
        batches_with_repeat > 0,
        "expected at least one batch with a repeated arrangement"
    );
}
