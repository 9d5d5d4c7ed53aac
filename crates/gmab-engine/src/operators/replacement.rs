//! Replaces the worst-ranked members of a population with fresh offspring.
use gmab_core::{Arm, Direction, Population};
use gmab_error::GmabResult;

/// Replaces the `children.len()` worst-ranked arms in `population` with
/// `children`, respecting `direction`. New arms enter with no reward
/// history — their statistics never inherit from the parents they replace.
pub fn replace_worst(
    population: &mut Population,
    direction: Direction,
    children: Vec<Vec<i64>>,
) -> GmabResult<()> {
    let ranked = population.ranked_indices(direction);
    let worst_slots = ranked.iter().rev().take(children.len());

    for (slot, genome) in worst_slots.zip(children) {
        population.replace(*slot, Arm::new(genome))?;
    }

    Ok(())
}
