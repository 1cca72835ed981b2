//! Injected collaborators the rules consult but never own.
//!
//! Combat math never reaches for a process-wide random generator. Callers pass
//! a [`RollSource`], so a seeded [`PcgRng`] replays identically and tests can
//! script exact outcomes with [`FixedRolls`].
mod rng;

pub use rng::{FixedRolls, PcgRng, RollSource};
