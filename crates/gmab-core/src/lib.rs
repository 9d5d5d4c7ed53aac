//! Core data structures for the GMAB genetic multi-armed bandit optimizer.
//!
//! This crate defines the types that are pure data, leaves-first: the
//! [`random::GmabRng`] seedable source, the [`arm::Arm`] reward record, the
//! [`population::Population`] that owns a fixed-size collection of arms, and
//! the small supporting [`bounds::Bounds`], [`direction::Direction`], and
//! [`rate::Rate`] types. The orchestration logic that ties these together
//! (the bandit selector, the genetic operators, and the engine loop) lives
//! in `gmab-engine`.
pub mod arm;
pub mod bounds;
pub mod direction;
pub mod random;
pub mod rate;

pub mod population;

pub use arm::Arm;
pub use bounds::Bounds;
pub use direction::Direction;
pub use population::Population;
pub use random::GmabRng;
pub use rate::Rate;

pub mod prelude {
    pub use super::arm::Arm;
    pub use super::bounds::Bounds;
    pub use super::direction::Direction;
    pub use super::population::Population;
    pub use super::random::GmabRng;
    pub use super::rate::Rate;
}
