//! A validated `[0, 1]` probability used for mutation/crossover rates.
//!
//! This is a trimmed-down relative of the scheduled-rate abstractions found
//! in larger genetic-algorithm engines: this spec only ever needs a fixed
//! rate, so there is no schedule machinery here, just the validity check.
//! `f32` matches the rate type the teacher's own alterers carry
//! (`radiate_core::AlterAction::Mutate`/`Crossover` both store `f32` rates).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rate(f32);

impl Rate {
    /// Builds a `Rate`, returning `None` if `value` is outside `[0, 1]` or NaN.
    pub fn new(value: f32) -> Option<Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<Rate> for f32 {
    fn from(r: Rate) -> f32 {
        r.0
    }
}
