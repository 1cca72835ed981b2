//! Player skill system with cooldown and mana management.
//!
//! # Design
//!
//! - **Skill**: One registered ability with its cooldown and mana cost
//! - **AbilityState**: Per-character ledger owning every skill plus the mana pool
//! - Skills are keyed by [`SkillId`](crate::SkillId); the map makes ids unique by construction
//! - Use is check-then-commit: an unusable or unknown skill is a silent no-op
//!
//! Hosts that need to know *why* a use failed call
//! [`AbilityState::try_use`] instead of [`AbilityState::use_skill`].

mod error;
mod ledger;
mod skill;

pub use error::AbilityError;
pub use ledger::{AbilityState, UseOutcome};
pub use skill::{Skill, SkillSpec};
