//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! Apart from the injected [`RollSource`](crate::env::RollSource) draws, all
//! combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `hit_chance` / `evaluate_hit`: Accuracy vs Evasion, bounded to [10%, 95%]
//! - `combo_multiplier`: +10% per consecutive hit, unbounded
//! - `elemental_multiplier`: Fire > Ice > Lightning > Fire
//! - `calculate_damage`: Power vs Defense with critical bonus and a 1.0 floor
//! - `resolve_attack`: Complete attack resolution (hit, crit, damage)
//!
//! Balance constants come from [`CombatTables`](crate::config::CombatTables).

pub mod damage;
pub mod element;
pub mod hit;
pub mod result;

pub use damage::{apply_damage, calculate_damage, combo_multiplier};
pub use element::{Element, elemental_multiplier};
pub use hit::{evaluate_hit, hit_chance};
pub use result::{AttackInput, CombatResult, DefenseInput, resolve_attack};
