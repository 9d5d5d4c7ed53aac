//! The top-level orchestrator: alternates bandit rounds and genetic rounds
//! over a fixed evaluation budget and reports the `top_k` best arms found.
use gmab_core::{Bounds, Direction, GmabRng, Population};
use gmab_error::{GmabResult, ensure};

use crate::bandit::UcbSelector;
use crate::config::GmabConfig;
use crate::operators::GeneticRound;

/// A candidate solution and its empirical statistics, as reported back to
/// the caller at the end of one `optimize` run.
///
/// This is the engine's only output type: it carries no reference back to
/// the population or engine that produced it, so it survives past the
/// `optimize` call that built it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ArmResult {
    pub action_vector: Vec<i64>,
    pub mean_reward: f64,
    pub num_pulls: u64,
}

/// The GMAB engine: owns no state between `optimize` calls beyond its
/// immutable [`GmabConfig`]. One call to `optimize` constructs a fresh RNG
/// and population, runs to completion, and returns the result — the engine
/// itself is stateless and safely reusable, or trivially [`Clone`]able into
/// an independent instance with the same config.
///
/// # Examples
/// ```no_run
/// use gmab_engine::{GmabConfig, GmabEngine};
///
/// let engine = GmabEngine::new(GmabConfig::default()).unwrap();
/// let result = engine
///     .optimize(
///         |x| Ok((x[0] as f64 - 3.0).powi(2) + (x[1] as f64 + 2.0).powi(2)),
///         &[(-10, 10), (-10, 10)],
///         5_000,
///         1,
///         Some(42),
///     )
///     .unwrap();
/// assert_eq!(result.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GmabEngine {
    config: GmabConfig,
}

impl GmabEngine {
    /// Builds an engine from a validated config. Re-validates the
    /// structural fields eagerly (independent of the builder's own
    /// validation) so a config assembled by hand can't smuggle an invalid
    /// rate or population size past construction.
    pub fn new(config: GmabConfig) -> GmabResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GmabConfig {
        &self.config
    }

    /// Runs one full optimization to completion.
    ///
    /// `objective` is called exactly `budget` times, each time with an
    /// `action_vector` satisfying `bounds`. The engine always minimizes
    /// internally; a caller that wants to maximize negates its objective
    /// before handing it here.
    #[tracing::instrument(skip(self, objective), fields(population_size = self.config.population_size))]
    pub fn optimize<F>(
        &self,
        mut objective: F,
        bounds: &[(i64, i64)],
        budget: u64,
        top_k: usize,
        seed: Option<u64>,
    ) -> GmabResult<Vec<ArmResult>>
    where
        F: FnMut(&[i64]) -> GmabResult<f64>,
    {
        ensure!(
            top_k > 0 && top_k <= self.config.population_size,
            InvalidConfig: "top_k must be in [1, population_size] ({}), got {}",
            self.config.population_size,
            top_k
        );
        ensure!(
            budget >= self.config.population_size as u64,
            InvalidConfig: "budget ({}) must be at least population_size ({})",
            budget,
            self.config.population_size
        );

        let bounds = Bounds::new(bounds.to_vec())?;
        let mut rng = GmabRng::new(seed);
        let mut population = Population::new(&bounds, self.config.population_size, &mut rng)?;

        let lattice_margin = bounds
            .lattice_size()
            .saturating_sub(self.config.population_size as u128);
        if lattice_margin < self.config.population_size as u128 {
            tracing::warn!(
                lattice_size = %bounds.lattice_size(),
                population_size = self.config.population_size,
                "lattice is barely large enough for population_size; genome resampling may be slow"
            );
        }

        let direction = Direction::Minimize;
        let selector = UcbSelector::new();
        let genetic_round = GeneticRound {
            crossover_rate: self.config.crossover_rate,
            mutation_rate: self.config.mutation_rate,
            mutation_span: self.config.mutation_span,
        };

        tracing::debug!(budget, top_k, "starting optimize");

        let mut evaluations_remaining = budget;
        let mut round_index: u64 = 0;

        while evaluations_remaining > 0 {
            let pulls_this_round =
                (self.config.population_size as u64).min(evaluations_remaining);

            population.reset_round_stats();
            for _ in 0..pulls_this_round {
                let idx = selector.select(&population, direction);
                let genome = population
                    .get(idx)
                    .expect("selector returns an in-bounds index")
                    .action_vector()
                    .to_vec();

                let reward = objective(&genome)?;

                population
                    .get_mut(idx)
                    .expect("selector returns an in-bounds index")
                    .update(reward)?;

                evaluations_remaining -= 1;
            }

            tracing::debug!(
                round_index,
                pulls_this_round,
                evaluations_remaining,
                "bandit round complete"
            );

            if evaluations_remaining > 0 {
                let stats = genetic_round.run(&mut population, &bounds, direction, &mut rng)?;
                tracing::debug!(
                    round_index,
                    children_produced = stats.children_produced,
                    collisions_resolved = stats.collisions_resolved,
                    "genetic round complete"
                );
            }

            round_index += 1;
        }

        let ranked = population.ranked_indices(direction);
        let results = ranked
            .into_iter()
            .take(top_k)
            .map(|i| {
                let arm = population.get(i).expect("ranked index is in bounds");
                ArmResult {
                    action_vector: arm.action_vector().to_vec(),
                    mean_reward: arm.mean_reward(),
                    num_pulls: arm.num_pulls(),
                }
            })
            .collect();

        Ok(results)
    }
}
