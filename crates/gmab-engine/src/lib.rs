//! The GMAB engine: UCB-1 bandit selection and genetic operators,
//! orchestrated over a fixed evaluation budget.
//!
//! This crate ties together the data structures in `gmab-core` ([`Arm`],
//! [`Population`], [`GmabRng`]) with the two pieces of decision logic the
//! top-level spec calls out as the hard part of this system: the
//! [`bandit::UcbSelector`] that decides which arm to pull next, and the
//! [`operators::GeneticRound`] that periodically refreshes the population.
//! [`engine::GmabEngine`] is the orchestrator that alternates the two under
//! a fixed evaluation budget.
pub mod bandit;
pub mod config;
pub mod engine;
pub mod operators;
pub mod ranking;

pub use bandit::UcbSelector;
pub use config::{GmabConfig, GmabConfigBuilder};
pub use engine::{ArmResult, GmabEngine};
pub use operators::{GeneticRound, RoundStats};
pub use ranking::{RankedArm, ucb_rank};

pub use gmab_core::{Arm, Bounds, Direction, GmabRng, Population, Rate};
pub use gmab_error::{GmabError, GmabResult};

/// Installs a compact `tracing-subscriber` fmt layer and a panic hook that
/// logs via `tracing::error!` instead of writing straight to stderr.
/// Idempotent: safe to call from every test or example that wants logging,
/// since only the first call takes effect.
///
/// The library itself never calls this — it only ever emits `tracing`
/// events, leaving subscriber setup to whoever embeds it (a CLI, a test, an
/// example).
pub fn init_logging() {
    use std::sync::Once;
    static INIT_LOGGING: Once = Once::new();

    INIT_LOGGING.call_once(|| {
        use tracing_subscriber::fmt::format::FmtSpan;
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        std::panic::set_hook(Box::new(|info| {
            tracing::error!("PANIC: {}", info);
        }));

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                    .with_target(false)
                    .with_level(true)
                    .compact(),
            )
            .init();
    });
}
