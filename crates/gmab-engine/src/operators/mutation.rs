//! Per-locus mutation with a configurable perturbation span.
use gmab_core::{Bounds, GmabRng, Rate};

/// Mutates `genome` in place, locus by locus, with probability
/// `mutation_rate` per locus. The perturbation at a mutated locus is a
/// discrete symmetric draw from `[-s, s] \ {0}` where
/// `s = max(1, round(mutation_span * (high - low)))`, clamped back into
/// `[low, high]`.
///
/// Returns the index of the last locus that was actually perturbed, or
/// `None` if no locus was touched this call — the caller uses this to know
/// which locus to re-roll first if the mutated genome collides with an
/// existing population member (§4.4 Uniqueness).
pub fn mutate_genome(
    genome: &mut [i64],
    bounds: &Bounds,
    mutation_rate: Rate,
    mutation_span: f64,
    rng: &mut GmabRng,
) -> Option<usize> {
    let mut last_touched = None;

    for locus in 0..genome.len() {
        if rng.bool(mutation_rate.value() as f64) {
            perturb_locus(genome, bounds, locus, mutation_span, rng);
            last_touched = Some(locus);
        }
    }

    last_touched
}

/// Redraws a single locus uniformly at random within its bound range. Used
/// both as the perturbation-magnitude fallback (span computed from bounds)
/// and as the last-resort uniqueness fix (`locus` redrawn uniformly).
pub fn resample_locus(genome: &mut [i64], bounds: &Bounds, locus: usize, rng: &mut GmabRng) {
    genome[locus] = rng.range_i64(bounds.low(locus), bounds.high(locus));
}

fn perturb_locus(
    genome: &mut [i64],
    bounds: &Bounds,
    locus: usize,
    mutation_span: f64,
    rng: &mut GmabRng,
) {
    let span = bounds.span(locus);
    let s = ((mutation_span * span as f64).round() as i64).max(1);

    // Uniform draw on [-s, s] \ {0}: sample [1, s] then flip sign with a
    // fair coin; this stays exactly symmetric and excludes zero for any s >= 1.
    let magnitude = rng.range_i64(1, s);
    let delta = if rng.bool(0.5) { magnitude } else { -magnitude };

    let low = bounds.low(locus);
    let high = bounds.high(locus);
    genome[locus] = (genome[locus] + delta).clamp(low, high);
}
