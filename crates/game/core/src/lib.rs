//! Deterministic per-tick combat and ability logic.
//!
//! `skirmish-core` defines the rules a host engine consults every frame:
//! enemy behavior decisions, hit/damage/elemental math, and the player's
//! skill cooldown and mana ledger. Everything here is synchronous and
//! allocation-light; randomness is always injected through
//! [`env::RollSource`] so the same inputs replay to the same outcomes.
//!
//! The host owns positions, rendering and transport. It feeds readings in
//! ([`enemy::Perception`], elapsed time) and applies the decisions that come
//! back ([`enemy::BehaviorState`], [`combat::CombatResult`],
//! [`mission::MissionSummary`]).
pub mod ability;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod env;
pub mod error;
pub mod mission;
pub mod packet;
pub mod types;

pub use ability::{AbilityError, AbilityState, Skill, SkillSpec, UseOutcome};
pub use combat::{
    AttackInput, CombatResult, DefenseInput, Element, calculate_damage, combo_multiplier,
    elemental_multiplier, evaluate_hit, hit_chance, resolve_attack,
};
pub use config::{CombatTables, DamageParams, ElementalParams, GameConfig, HitChanceParams};
pub use enemy::{BehaviorState, EnemyDecisionUnit, EnemyError, EnemyProfile, Perception};
pub use env::{FixedRolls, PcgRng, RollSource};
pub use error::{ErrorSeverity, GameError};
pub use mission::{MissionProgress, MissionSummary};
pub use packet::{CombatEvent, EnemyUpdate, PlayerState};
pub use types::{EntityId, Rotation, SkillId, Vec3};
