//! Minimize/maximize as a sign multiplier, so ranking and UCB scoring share
//! one code path instead of branching on the objective sense everywhere.

/// Whether the search is minimizing or maximizing the objective.
///
/// The engine itself always minimizes internally; a caller wanting to
/// maximize negates its objective before the core ever sees it (this is
/// the same convention the reference Python wrapper uses: `direction = -1
/// if maximize else 1`, applied to the evaluation before it's recorded).
/// `Direction` exists as a sign multiplier for ranking and UCB scoring so
/// both paths share one implementation instead of branching on sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// `+1.0` for minimization, `-1.0` for maximization.
    pub fn as_f64(self) -> f64 {
        match self {
            Direction::Minimize => 1.0,
            Direction::Maximize => -1.0,
        }
    }

    /// True if `a` is strictly better than `b` under this direction.
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Minimize => a < b,
            Direction::Maximize => a > b,
        }
    }
}
