//! Uniform crossover over integer genomes.
use gmab_core::{GmabRng, Rate};

/// With probability `crossover_rate`, produces two children via uniform
/// crossover: for every locus, child A takes parent A's allele with
/// probability 0.5 (else parent B's), and child B takes the complement.
/// With probability `1 - crossover_rate` the children are plain clones of
/// the parents.
pub fn uniform_crossover(
    parent_a: &[i64],
    parent_b: &[i64],
    crossover_rate: Rate,
    rng: &mut GmabRng,
) -> (Vec<i64>, Vec<i64>) {
    debug_assert_eq!(parent_a.len(), parent_b.len());

    if !rng.bool(crossover_rate.value() as f64) {
        return (parent_a.to_vec(), parent_b.to_vec());
    }

    let mut child_a = Vec::with_capacity(parent_a.len());
    let mut child_b = Vec::with_capacity(parent_b.len());

    for i in 0..parent_a.len() {
        if rng.bool(0.5) {
            child_a.push(parent_a[i]);
            child_b.push(parent_b[i]);
        } else {
            child_a.push(parent_b[i]);
            child_b.push(parent_a[i]);
        }
    }

    (child_a, child_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_clones_parents() {
        let mut rng = GmabRng::from_seed(1);
        let a = vec![1, 2, 3];
        let b = vec![4, 5, 6];
        let (child_a, child_b) = uniform_crossover(&a, &b, Rate::new(0.0).unwrap(), &mut rng);
        assert_eq!(child_a, a);
        assert_eq!(child_b, b);
    }

    #[test]
    fn children_are_complementary_recombinations() {
        let mut rng = GmabRng::from_seed(42);
        let a = vec![1, 1, 1, 1];
        let b = vec![2, 2, 2, 2];
        let (child_a, child_b) = uniform_crossover(&a, &b, Rate::new(1.0).unwrap(), &mut rng);

        for i in 0..4 {
            assert!(child_a[i] == 1 || child_a[i] == 2);
            // Wherever child_a took parent a's gene, child_b must have
            // taken parent b's (and vice versa) — they are complements.
            assert_ne!(child_a[i], child_b[i]);
        }
    }
}
