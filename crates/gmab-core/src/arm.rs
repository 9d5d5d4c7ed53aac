//! A single candidate solution and its running reward statistics.
use gmab_error::{GmabResult, gmab_bail};

/// A candidate integer solution (`action_vector`) together with its
/// lifetime reward statistics, plus a smaller set of statistics scoped to
/// the *current bandit round* that the UCB selector consumes.
///
/// `action_vector` never changes after construction; only the reward
/// counters are ever mutated (append-only for the lifetime counters, reset
/// each bandit round for the round-scoped ones).
#[derive(Clone, Debug, PartialEq)]
pub struct Arm {
    action_vector: Vec<i64>,
    sum_reward: f64,
    num_pulls: u64,
    round_reward: f64,
    round_pulls: u64,
}

impl Arm {
    pub fn new(action_vector: Vec<i64>) -> Self {
        Self {
            action_vector,
            sum_reward: 0.0,
            num_pulls: 0,
            round_reward: 0.0,
            round_pulls: 0,
        }
    }

    pub fn action_vector(&self) -> &[i64] {
        &self.action_vector
    }

    /// Records a new reward observation. Fails if `reward` is not finite.
    pub fn update(&mut self, reward: f64) -> GmabResult<()> {
        if !reward.is_finite() {
            gmab_bail!(Objective: "objective returned a non-finite reward: {}", reward);
        }

        self.sum_reward += reward;
        self.num_pulls += 1;
        self.round_reward += reward;
        self.round_pulls += 1;
        Ok(())
    }

    /// Zeroes the round-scoped counters. Called once per arm at the start
    /// of every bandit round; never touches the lifetime counters.
    pub fn reset_round(&mut self) {
        self.round_reward = 0.0;
        self.round_pulls = 0;
    }

    pub fn num_pulls(&self) -> u64 {
        self.num_pulls
    }

    /// The lifetime empirical mean, or `0.0` if the arm has never been
    /// pulled. An unsampled arm is not meaningfully "zero" — callers doing
    /// ranking must treat `num_pulls() == 0` as "worst" rather than reading
    /// this value at face value; see [`crate::Population::sort_by_mean`].
    pub fn mean_reward(&self) -> f64 {
        if self.num_pulls == 0 {
            0.0
        } else {
            self.sum_reward / self.num_pulls as f64
        }
    }

    pub fn round_pulls(&self) -> u64 {
        self.round_pulls
    }

    pub fn round_mean_reward(&self) -> f64 {
        if self.round_pulls == 0 {
            0.0
        } else {
            self.round_reward / self.round_pulls as f64
        }
    }
}
