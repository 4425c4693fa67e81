//! Uniform sampling without replacement.

use rand::Rng;

use crate::error::{ArcanaError, ArcanaResult};

/// Draw `n` distinct elements from `source` in random order.
///
/// Runs a Fisher-Yates shuffle over a scratch copy (for `i` from
/// `len - 1` down to 1, swap `i` with a uniform `j` in `0..=i`) and keeps
/// the first `n` entries. `source` is left untouched. Asking for more
/// elements than `source` holds is an [`ArcanaError::InvalidArgument`].
pub fn pick_unique<T, R>(source: &[T], n: usize, rng: &mut R) -> ArcanaResult<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if n > source.len() {
        return Err(ArcanaError::InvalidArgument {
            requested: n,
            available: source.len(),
        });
    }

    let mut scratch = source.to_vec();
    for i in (1..scratch.len()).rev() {
        let j = rng.random_range(0..=i);
        scratch.swap(i, j);
    }
    scratch.truncate(n);
    Ok(scratch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DECK;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn three_distinct_cards_from_deck() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let picked = pick_unique(&DECK, 3, &mut rng).unwrap();
            assert_eq!(picked.len(), 3);
            let ids: HashSet<_> = picked.iter().map(|c| c.id).collect();
            assert_eq!(ids.len(), 3);
            assert!(picked.iter().all(|c| DECK.contains(c)));
        }
    }

    #[test]
    fn too_many_is_invalid_argument() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            pick_unique(&DECK, 11, &mut rng),
            Err(ArcanaError::InvalidArgument {
                requested: 11,
                available: 10
            })
        );
    }

    #[test]
    fn edge_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_unique(&DECK, 0, &mut rng).unwrap().is_empty());
        let empty: [u8; 0] = [];
        assert!(pick_unique(&empty, 0, &mut rng).unwrap().is_empty());

        let mut all = pick_unique(&DECK, DECK.len(), &mut rng).unwrap();
        all.sort_by_key(|c| c.id);
        let mut expected = DECK.to_vec();
        expected.sort_by_key(|c| c.id);
        assert_eq!(all, expected);
    }

    #[test]
    fn same_seed_same_draw() {
        let a = pick_unique(&DECK, 3, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = pick_unique(&DECK, 3, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn first_position_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let trials = 20_000;
        for _ in 0..trials {
            let picked = pick_unique(&DECK, 1, &mut rng).unwrap();
            *counts.entry(picked[0].id).or_default() += 1;
        }
        assert_eq!(counts.len(), DECK.len());
        // Expected 2000 each; allow a wide band.
        for (id, n) in counts {
            assert!((1600..=2400).contains(&n), "{id} drawn {n} times");
        }
    }

    proptest! {
        #[test]
        fn distinct_and_source_untouched(
            source in proptest::collection::hash_set(any::<u32>(), 0..40),
            seed in any::<u64>(),
            n in 0usize..40,
        ) {
            let source: Vec<u32> = source.into_iter().collect();
            let before = source.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            match pick_unique(&source, n, &mut rng) {
                Ok(picked) => {
                    prop_assert!(n <= source.len());
                    prop_assert_eq!(picked.len(), n);
                    let unique: HashSet<_> = picked.iter().collect();
                    prop_assert_eq!(unique.len(), n);
                    prop_assert!(picked.iter().all(|x| source.contains(x)));
                }
                Err(e) => {
                    prop_assert!(n > source.len());
                    let is_invalid = matches!(e, ArcanaError::InvalidArgument { .. });
                    prop_assert!(is_invalid);
                }
            }
            prop_assert_eq!(source, before);
        }
    }
}
