//! Per-dimension integer bounds describing the search lattice.
use gmab_error::{GmabResult, ensure};

/// The inclusive per-dimension bounds `[low_i, high_i]` an action vector
/// must satisfy. `Bounds` is the core's only view of the decision space —
/// it knows nothing about the heterogeneous parameter types (categorical,
/// float, ...) a wrapper may have encoded into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Bounds {
    pairs: Vec<(i64, i64)>,
}

impl Bounds {
    /// Validates and wraps `pairs`. Fails if any `low_i > high_i`.
    pub fn new(pairs: Vec<(i64, i64)>) -> GmabResult<Self> {
        for (i, &(low, high)) in pairs.iter().enumerate() {
            ensure!(
                low <= high,
                InvalidConfig: "bounds[{}] has low ({}) > high ({})",
                i,
                low,
                high
            );
        }
        Ok(Self { pairs })
    }

    pub fn dims(&self) -> usize {
        self.pairs.len()
    }

    pub fn as_slice(&self) -> &[(i64, i64)] {
        &self.pairs
    }

    pub fn low(&self, dim: usize) -> i64 {
        self.pairs[dim].0
    }

    pub fn high(&self, dim: usize) -> i64 {
        self.pairs[dim].1
    }

    pub fn span(&self, dim: usize) -> i64 {
        self.pairs[dim].1 - self.pairs[dim].0
    }

    /// Whether `genome` satisfies every per-dimension bound.
    pub fn contains(&self, genome: &[i64]) -> bool {
        genome.len() == self.pairs.len()
            && genome
                .iter()
                .zip(&self.pairs)
                .all(|(&x, &(low, high))| x >= low && x <= high)
    }

    /// The number of integer points in the lattice, saturating at `u128::MAX`
    /// rather than overflowing for very wide/high-dimensional bounds.
    pub fn lattice_size(&self) -> u128 {
        self.pairs.iter().fold(1u128, |acc, &(low, high)| {
            let count = (high - low + 1) as u128;
            acc.saturating_mul(count)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bound() {
        let err = Bounds::new(vec![(0, 10), (5, 3)]).unwrap_err();
        assert!(err.to_string().contains("bounds[1]"));
    }

    #[test]
    fn lattice_size_multiplies_spans() {
        let bounds = Bounds::new(vec![(0, 1), (0, 1)]).unwrap();
        assert_eq!(bounds.lattice_size(), 4);

        let bounds = Bounds::new(vec![(-5, 10), (-5, 10)]).unwrap();
        assert_eq!(bounds.lattice_size(), 16 * 16);
    }

    #[test]
    fn contains_checks_every_dimension() {
        let bounds = Bounds::new(vec![(0, 10), (-5, 5)]).unwrap();
        assert!(bounds.contains(&[0, -5]));
        assert!(bounds.contains(&[10, 5]));
        assert!(!bounds.contains(&[11, 0]));
        assert!(!bounds.contains(&[0, 6]));
        assert!(!bounds.contains(&[0]));
    }
}
