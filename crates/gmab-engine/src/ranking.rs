//! Post-hoc UCB ranking across multiple independent `optimize` runs.
//!
//! This is a reporting convenience, not part of the core bandit/genetic
//! loop: a wrapper that calls `optimize` several times (different seeds, or
//! different engine instances entirely) ends up with several independent
//! [`crate::ArmResult`] sets and wants one combined ranking that still
//! rewards arms it has less evidence about. The formula mirrors the
//! reference wrapper's `_ucb_ranking` static method exactly.
use gmab_core::Direction;

use crate::engine::ArmResult;

/// One result re-scored by [`ucb_rank`], carrying the original result
/// alongside the score that determined its rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct RankedArm {
    pub action_vector: Vec<i64>,
    pub mean_reward: f64,
    pub num_pulls: u64,
    pub ucb_score: f64,
}

/// Ranks `results` by a UCB-style score computed from `value_of(result)`
/// (typically `|r| r.mean_reward`) and each result's `num_pulls`.
///
/// For each result: `normalized_value = (value - min) / (max - min)`
/// (denominator floored at `1e-9` when every value is equal), `penalty =
/// sqrt(2 * ln(total_pulls) / num_pulls)` where `total_pulls` is the sum of
/// `num_pulls` across all of `results`, and `ucb_score = normalized_value +
/// direction * penalty`. The returned vector is sorted ascending by
/// `direction * ucb_score`, so the first entry is always the preferred
/// arm regardless of `direction`.
///
/// Returns an empty vector if `results` is empty. A result with
/// `num_pulls == 0` gets a penalty of `0.0` rather than dividing by zero,
/// since an unpulled arm shouldn't usually reach this function in the
/// first place (S6-style callers only ever pass arms that were evaluated).
pub fn ucb_rank(
    results: &[ArmResult],
    value_of: impl Fn(&ArmResult) -> f64,
    direction: Direction,
) -> Vec<RankedArm> {
    if results.is_empty() {
        return Vec::new();
    }

    let values: Vec<f64> = results.iter().map(&value_of).collect();
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let denom = (max - min).max(1e-9);

    let total_pulls: u64 = results.iter().map(|r| r.num_pulls).sum();
    let ln_total = (total_pulls.max(1) as f64).ln();

    let mut ranked: Vec<RankedArm> = results
        .iter()
        .zip(values)
        .map(|(r, value)| {
            let normalized_value = (value - min) / denom;
            let penalty = if r.num_pulls == 0 {
                0.0
            } else {
                (2.0 * ln_total / r.num_pulls as f64).sqrt()
            };
            let ucb_score = normalized_value + direction.as_f64() * penalty;

            RankedArm {
                action_vector: r.action_vector.clone(),
                mean_reward: r.mean_reward,
                num_pulls: r.num_pulls,
                ucb_score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        let key_a = direction.as_f64() * a.ucb_score;
        let key_b = direction.as_f64() * b.ucb_score;
        key_a.partial_cmp(&key_b).unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(action: i64, mean_reward: f64, num_pulls: u64) -> ArmResult {
        ArmResult {
            action_vector: vec![action],
            mean_reward,
            num_pulls,
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(ucb_rank(&[], |r| r.mean_reward, Direction::Minimize).is_empty());
    }

    #[test]
    fn degenerate_values_do_not_divide_by_zero() {
        let results = vec![result(1, 5.0, 10), result(2, 5.0, 10)];
        let ranked = ucb_rank(&results, |r| r.mean_reward, Direction::Minimize);
        for r in &ranked {
            assert!(r.ucb_score.is_finite());
        }
    }

    #[test]
    fn minimizing_penalizes_thin_evidence() {
        // Arm A has the best value and heavy evidence (small penalty);
        // arm B has a barely-worse value but almost no evidence (big
        // penalty). The penalty term discourages trusting a lucky-looking
        // mean built on very few pulls, so A should still win.
        let results = vec![result(1, 0.0, 1000), result(2, 0.05, 2)];
        let ranked = ucb_rank(&results, |r| r.mean_reward, Direction::Minimize);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].action_vector, vec![1]);
    }

    #[test]
    fn maximizing_reverses_the_preference_direction() {
        let results = vec![result(1, 10.0, 50), result(2, 0.0, 50)];
        let ranked = ucb_rank(&results, |r| r.mean_reward, Direction::Maximize);
        assert_eq!(ranked[0].action_vector, vec![1]);
    }
}
