//! Immutable engine configuration and its eager validation.
use gmab_core::Rate;
use gmab_error::{GmabResult, ensure};

/// Configuration for a [`crate::engine::GmabEngine`], immutable once built.
///
/// Fields that can be validated without knowing the bounds/budget/top_k of
/// a particular `optimize` call (§4.5 of the spec) are checked eagerly in
/// [`GmabConfig::validate`], called from [`GmabConfigBuilder::build`].
#[derive(Clone, Debug, PartialEq)]
pub struct GmabConfig {
    pub population_size: usize,
    pub mutation_rate: Rate,
    pub crossover_rate: Rate,
    pub mutation_span: f64,
}

impl GmabConfig {
    pub fn builder() -> GmabConfigBuilder {
        GmabConfigBuilder::default()
    }

    /// Structural validation that needs only the config itself (no bounds,
    /// budget, or `top_k`); re-run eagerly by [`crate::engine::GmabEngine::new`]
    /// as well as by the builder, since a config can be constructed directly
    /// via struct-update syntax and bypass the builder entirely.
    pub(crate) fn validate(&self) -> GmabResult<()> {
        ensure!(
            self.population_size > 0,
            InvalidConfig: "population_size must be positive, got 0"
        );
        ensure!(
            self.mutation_span >= 0.0,
            InvalidConfig: "mutation_span must be >= 0, got {}",
            self.mutation_span
        );
        Ok(())
    }
}

impl Default for GmabConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: Rate::new(0.1).expect("0.1 is a valid rate"),
            crossover_rate: Rate::new(0.9).expect("0.9 is a valid rate"),
            mutation_span: 1.0,
        }
    }
}

/// Builds a [`GmabConfig`], mirroring the documented defaults when a field
/// is left unset.
#[derive(Clone, Debug, Default)]
pub struct GmabConfigBuilder {
    population_size: Option<usize>,
    mutation_rate: Option<f32>,
    crossover_rate: Option<f32>,
    mutation_span: Option<f64>,
}

impl GmabConfigBuilder {
    pub fn population_size(mut self, n: usize) -> Self {
        self.population_size = Some(n);
        self
    }

    pub fn mutation_rate(mut self, rate: f32) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    pub fn crossover_rate(mut self, rate: f32) -> Self {
        self.crossover_rate = Some(rate);
        self
    }

    pub fn mutation_span(mut self, span: f64) -> Self {
        self.mutation_span = Some(span);
        self
    }

    pub fn build(self) -> GmabResult<GmabConfig> {
        let default = GmabConfig::default();

        let mutation_rate = match self.mutation_rate {
            Some(r) => Rate::new(r).ok_or_else(|| {
                gmab_error::gmab_err!(InvalidConfig: "mutation_rate must be in [0, 1], got {}", r)
            })?,
            None => default.mutation_rate,
        };

        let crossover_rate = match self.crossover_rate {
            Some(r) => Rate::new(r).ok_or_else(|| {
                gmab_error::gmab_err!(InvalidConfig: "crossover_rate must be in [0, 1], got {}", r)
            })?,
            None => default.crossover_rate,
        };

        let config = GmabConfig {
            population_size: self.population_size.unwrap_or(default.population_size),
            mutation_rate,
            crossover_rate,
            mutation_span: self.mutation_span.unwrap_or(default.mutation_span),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GmabConfig::builder().build().unwrap();
        assert_eq!(config, GmabConfig::default());
    }

    #[test]
    fn rejects_zero_population() {
        let err = GmabConfig::builder().population_size(0).build().unwrap_err();
        assert!(err.to_string().contains("population_size"));
    }

    #[test]
    fn rejects_out_of_range_rates() {
        assert!(GmabConfig::builder().mutation_rate(-0.1).build().is_err());
        assert!(GmabConfig::builder().crossover_rate(1.5).build().is_err());
    }

    #[test]
    fn rejects_negative_mutation_span() {
        let err = GmabConfig::builder().mutation_span(-0.1).build().unwrap_err();
        assert!(err.to_string().contains("mutation_span"));
    }
}
