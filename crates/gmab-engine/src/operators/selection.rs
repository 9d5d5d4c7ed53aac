//! Rank-based parent selection: each parent comes from the top half of the
//! population, ranked by lifetime mean reward.
use gmab_core::GmabRng;

/// Picks one parent's rank-relative index from the top half of a
/// `population_len`-sized, already-ranked population.
///
/// Returns an index into `0..population_len/2`. The caller maps this back
/// to a population slot via the ranked-index list produced by
/// [`gmab_core::Population::ranked_indices`].
pub fn select_parent_rank(population_len: usize, rng: &mut GmabRng) -> usize {
    let half = (population_len / 2).max(1);
    rng.below(half)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_top_half() {
        let mut rng = GmabRng::from_seed(5);
        for _ in 0..200 {
            let rank = select_parent_rank(20, &mut rng);
            assert!(rank < 10);
        }
    }

    #[test]
    fn degenerate_population_of_one() {
        let mut rng = GmabRng::from_seed(5);
        assert_eq!(select_parent_rank(1, &mut rng), 0);
    }
}
