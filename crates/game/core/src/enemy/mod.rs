//! Enemy decision-making.
//!
//! An enemy's behavior is recomputed from scratch every tick out of its
//! current health and the host's readings. There is no remembered previous
//! state, so an enemy standing on a range boundary may flip between states
//! from one tick to the next; that is expected.

mod decision;
mod error;
mod profile;
mod state;
mod unit;

pub use decision::{Perception, decide};
pub use error::EnemyError;
pub use profile::EnemyProfile;
pub use state::BehaviorState;
pub use unit::EnemyDecisionUnit;
