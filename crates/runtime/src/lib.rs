//! Synchronous encounter driver on top of `skirmish-core`.
//!
//! An [`Encounter`] owns everything one fight needs for a frame-stepped host:
//! the player's skill ledger, the enemies keyed by id, the active mission and
//! an injected roll source. The host calls [`Encounter::tick`] once per frame
//! with elapsed time and fresh readings, and reports attacks as they happen.
//! Nothing here blocks, spawns threads or allocates per enemy per tick beyond
//! the returned report.

pub mod encounter;
pub mod error;
pub mod logging;

pub use encounter::{Combatant, Encounter, EnemyReading, PlayerAttack, TickReport};
pub use error::{EncounterError, Result};
