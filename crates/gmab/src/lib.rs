//! A genetic multi-armed bandit (GMAB) optimizer for noisy, integer-vector
//! objective functions.
//!
//! This crate is a thin facade: it re-exports the core data structures from
//! `gmab-core` and the orchestrator from `gmab-engine` so a caller only
//! ever needs one dependency. See [`gmab_engine::GmabEngine`] for the main
//! entry point.
//!
//! ```no_run
//! use gmab::{GmabConfig, GmabEngine};
//!
//! let engine = GmabEngine::new(GmabConfig::default()).unwrap();
//! let results = engine
//!     .optimize(
//!         |x| Ok((x[0] as f64 - 3.0).powi(2) + (x[1] as f64 + 2.0).powi(2)),
//!         &[(-10, 10), (-10, 10)],
//!         5_000,
//!         1,
//!         Some(42),
//!     )
//!     .unwrap();
//! println!("{:?}", results[0]);
//! ```
pub use gmab_core::*;
pub use gmab_engine::*;
pub use gmab_error::{ErrorKind, GmabError, GmabResult, ensure, gmab_bail, gmab_err};
