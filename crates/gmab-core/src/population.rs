//! The fixed-size, genome-unique collection of [`Arm`]s the engine evolves.
use std::collections::HashMap;

use gmab_error::{GmabResult, ensure, gmab_bail};

use crate::arm::Arm;
use crate::bounds::Bounds;
use crate::direction::Direction;
use crate::random::GmabRng;

/// A fixed-size, ordered collection of [`Arm`]s with uniqueness of genomes
/// enforced via a genome -> index lookup table.
///
/// `Population` does not grow or shrink on its own: the genetic operator
/// layer replaces members in place (see [`Population::replace`]); nothing
/// in this type changes `len()`.
#[derive(Clone, Debug)]
pub struct Population {
    members: Vec<Arm>,
    index: HashMap<Vec<i64>, usize>,
}

/// Bounded-retry cap on whole-genome resampling before
/// [`Population::sample_unique_genome`] falls back to a linear scan of the
/// lattice. Generous enough that a population far from saturating its
/// lattice almost never reaches it, while still bounding the random-draw
/// path to linear time on a near-saturated one.
const MAX_RANDOM_RESAMPLE_ATTEMPTS: usize = 100;

impl Population {
    /// Draws `n` distinct genomes uniformly at random from the lattice
    /// described by `bounds`. Each genome is sampled locus-by-locus;
    /// duplicates are rejected and resampled, up to
    /// [`MAX_RANDOM_RESAMPLE_ATTEMPTS`] times, after which construction
    /// falls back to a linear scan of the lattice for the first free point
    /// (see [`Population::first_unoccupied_lattice_point`]) — this is what
    /// keeps a near-saturated lattice from resampling forever.
    ///
    /// Fails with `InvalidConfig` if the lattice has fewer than `n` points.
    pub fn new(bounds: &Bounds, n: usize, rng: &mut GmabRng) -> GmabResult<Self> {
        ensure!(
            bounds.lattice_size() >= n as u128,
            InvalidConfig: "population_size ({}) exceeds the lattice size ({}) implied by bounds",
            n,
            bounds.lattice_size()
        );

        let mut members = Vec::with_capacity(n);
        let mut index = HashMap::with_capacity(n);

        for _ in 0..n {
            let genome = Self::sample_unique_genome(bounds, &index, rng);
            index.insert(genome.clone(), members.len());
            members.push(Arm::new(genome));
        }

        Ok(Self { members, index })
    }

    fn sample_unique_genome(
        bounds: &Bounds,
        index: &HashMap<Vec<i64>, usize>,
        rng: &mut GmabRng,
    ) -> Vec<i64> {
        for _ in 0..MAX_RANDOM_RESAMPLE_ATTEMPTS {
            let genome: Vec<i64> = (0..bounds.dims())
                .map(|d| rng.range_i64(bounds.low(d), bounds.high(d)))
                .collect();

            if !index.contains_key(&genome) {
                return genome;
            }
        }

        Self::first_unoccupied_lattice_point(bounds, index)
            .expect("Population::new already checked lattice_size >= n")
    }

    /// Deterministic fallback for [`Population::sample_unique_genome`]:
    /// walks the lattice like a mixed-radix odometer, locus 0 fastest,
    /// starting from the all-`low` corner, and returns the first genome not
    /// already present in `index`. Terminates because the caller guarantees
    /// the lattice has at least one free point left.
    fn first_unoccupied_lattice_point(
        bounds: &Bounds,
        index: &HashMap<Vec<i64>, usize>,
    ) -> Option<Vec<i64>> {
        let mut genome: Vec<i64> = bounds.as_slice().iter().map(|&(low, _)| low).collect();

        loop {
            if !index.contains_key(&genome) {
                return Some(genome);
            }

            let mut d = 0;
            loop {
                if d >= genome.len() {
                    return None;
                }
                if genome[d] < bounds.high(d) {
                    genome[d] += 1;
                    break;
                }
                genome[d] = bounds.low(d);
                d += 1;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Arm> {
        self.members.get(i)
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut Arm> {
        self.members.get_mut(i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arm> {
        self.members.iter()
    }

    /// Amortized O(1) membership check by genome.
    pub fn contains(&self, genome: &[i64]) -> bool {
        self.index.contains_key(genome)
    }

    /// Replaces the arm at `i` with `arm`, maintaining the genome index.
    ///
    /// Inserting a genome that already belongs to a *different* slot is a
    /// programming error: the genetic operator layer must guarantee
    /// uniqueness before calling this (e.g. by resampling a colliding
    /// mutation) — see [`Population::contains`].
    pub fn replace(&mut self, i: usize, arm: Arm) -> GmabResult<()> {
        if let Some(&existing) = self.index.get(arm.action_vector()) {
            if existing != i {
                gmab_bail!(
                    Internal: "attempted to insert a duplicate genome at index {} (already at {})",
                    i,
                    existing
                );
            }
        }

        let old_genome = self.members[i].action_vector().to_vec();
        self.index.remove(&old_genome);
        self.index.insert(arm.action_vector().to_vec(), i);
        self.members[i] = arm;
        Ok(())
    }

    /// Zeroes every arm's round-scoped counters. Called once at the start
    /// of each bandit round.
    pub fn reset_round_stats(&mut self) {
        for arm in &mut self.members {
            arm.reset_round();
        }
    }

    /// `T` in the UCB-1 formula: the sum of round-scoped pulls across the
    /// whole population.
    pub fn total_round_pulls(&self) -> u64 {
        self.members.iter().map(Arm::round_pulls).sum()
    }

    /// Returns indices into the population ordered best-first by lifetime
    /// mean reward, respecting `direction`. Unsampled arms (`num_pulls ==
    /// 0`) always sort last, since they have no meaningful mean.
    pub fn ranked_indices(&self, direction: Direction) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.members.len()).collect();
        indices.sort_by(|&a, &b| {
            let arm_a = &self.members[a];
            let arm_b = &self.members[b];

            match (arm_a.num_pulls() == 0, arm_b.num_pulls() == 0) {
                (true, true) => std::cmp::Ordering::Equal,
                (true, false) => std::cmp::Ordering::Greater,
                (false, true) => std::cmp::Ordering::Less,
                (false, false) => {
                    let cmp = arm_a
                        .mean_reward()
                        .partial_cmp(&arm_b.mean_reward())
                        .unwrap_or(std::cmp::Ordering::Equal);
                    match direction {
                        Direction::Minimize => cmp,
                        Direction::Maximize => cmp.reverse(),
                    }
                }
            }
        });
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(pairs: Vec<(i64, i64)>) -> Bounds {
        Bounds::new(pairs).unwrap()
    }

    #[test]
    fn new_population_has_unique_genomes() {
        let b = bounds(vec![(0, 10), (0, 10)]);
        let mut rng = GmabRng::from_seed(1);
        let pop = Population::new(&b, 20, &mut rng).unwrap();

        assert_eq!(pop.len(), 20);
        let mut seen = std::collections::HashSet::new();
        for arm in pop.iter() {
            assert!(seen.insert(arm.action_vector().to_vec()), "duplicate genome");
            assert!(b.contains(arm.action_vector()));
        }
    }

    #[test]
    fn fills_a_near_saturated_lattice_via_linear_scan_fallback() {
        // A 6x6 lattice (36 points) asked to fill all but one slot: random
        // resampling collides constantly near the end, forcing
        // `sample_unique_genome` past MAX_RANDOM_RESAMPLE_ATTEMPTS and into
        // the linear-scan fallback for the last several members.
        let b = bounds(vec![(0, 5), (0, 5)]);
        let mut rng = GmabRng::from_seed(99);
        let pop = Population::new(&b, 35, &mut rng).unwrap();

        assert_eq!(pop.len(), 35);
        let mut seen = std::collections::HashSet::new();
        for arm in pop.iter() {
            assert!(seen.insert(arm.action_vector().to_vec()), "duplicate genome");
            assert!(b.contains(arm.action_vector()));
        }
    }

    #[test]
    fn rejects_population_larger_than_lattice() {
        let b = bounds(vec![(0, 1), (0, 1)]);
        let mut rng = GmabRng::from_seed(1);
        let err = Population::new(&b, 20, &mut rng).unwrap_err();
        assert!(err.to_string().contains("lattice"));
    }

    #[test]
    fn replace_maintains_index() {
        let b = bounds(vec![(0, 100)]);
        let mut rng = GmabRng::from_seed(3);
        let mut pop = Population::new(&b, 5, &mut rng).unwrap();

        let victim_genome = pop.get(0).unwrap().action_vector().to_vec();
        let new_arm = Arm::new(vec![999]);
        pop.replace(0, new_arm).unwrap();

        assert!(!pop.contains(&victim_genome));
        assert!(pop.contains(&[999]));
    }

    #[test]
    fn ranked_indices_puts_unsampled_last_and_respects_direction() {
        let mut pop = Population {
            members: vec![Arm::new(vec![0]), Arm::new(vec![1]), Arm::new(vec![2])],
            index: HashMap::from([
                (vec![0], 0),
                (vec![1], 1),
                (vec![2], 2),
            ]),
        };
        pop.get_mut(0).unwrap().update(5.0).unwrap();
        pop.get_mut(1).unwrap().update(1.0).unwrap();
        // index 2 stays unsampled.

        let ranked = pop.ranked_indices(Direction::Minimize);
        assert_eq!(ranked, vec![1, 0, 2]);

        let ranked_max = pop.ranked_indices(Direction::Maximize);
        assert_eq!(ranked_max, vec![0, 1, 2]);
    }
}
