//! Combat result types and attack resolution.

use crate::config::CombatTables;
use crate::env::RollSource;

use super::damage::{calculate_damage, combo_multiplier};
use super::element::{Element, elemental_multiplier};
use super::hit::evaluate_hit;

/// Offensive side of one attack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackInput {
    pub accuracy: f32,
    /// Raw power before defense, critical, element and combo modifiers.
    pub power: f32,
    pub element: Element,
    /// Consecutive hits landed before this one.
    pub combo: u32,
}

impl AttackInput {
    pub const fn new(accuracy: f32, power: f32) -> Self {
        Self {
            accuracy,
            power,
            element: Element::Null,
            combo: 0,
        }
    }

    pub const fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub const fn with_combo(mut self, combo: u32) -> Self {
        self.combo = combo;
        self
    }
}

/// Defensive side of one attack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefenseInput {
    pub evasion: f32,
    pub defense: f32,
    pub element: Element,
}

/// Outcome of a single attack evaluation.
///
/// Produced fresh per attack and consumed immediately by the caller, which
/// applies `damage_dealt` to the target and surfaces the rest to the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResult {
    /// Zero on a miss.
    pub damage_dealt: f32,
    pub is_hit: bool,
    pub is_critical: bool,
    /// Cooldown left on the skill that produced this attack (0 for basic attacks).
    pub cooldown_remaining: f32,
}

impl CombatResult {
    pub const fn miss(cooldown_remaining: f32) -> Self {
        Self {
            damage_dealt: 0.0,
            is_hit: false,
            is_critical: false,
            cooldown_remaining,
        }
    }
}

/// Resolve a complete attack sequence.
///
/// 1. Hit check (one roll).
/// 2. On a hit, critical check (one roll) against `damage.crit_chance`.
/// 3. `calculate_damage` with the critical flag, then the elemental and combo
///    multipliers.
///
/// A miss consumes a single roll and deals nothing.
pub fn resolve_attack(
    attack: &AttackInput,
    defense: &DefenseInput,
    cooldown_remaining: f32,
    tables: &CombatTables,
    rng: &mut impl RollSource,
) -> CombatResult {
    if !evaluate_hit(attack.accuracy, defense.evasion, tables, rng) {
        tracing::trace!(
            accuracy = attack.accuracy,
            evasion = defense.evasion,
            "attack missed"
        );
        return CombatResult::miss(cooldown_remaining);
    }

    let is_critical = rng.next_unit() < tables.damage.crit_chance;

    let base = calculate_damage(attack.power, defense.defense, is_critical, tables);
    let elemental = elemental_multiplier(attack.element, defense.element, tables);
    let combo = combo_multiplier(attack.combo, tables);
    let damage_dealt = base * elemental * combo;

    tracing::trace!(
        base,
        elemental,
        combo,
        damage_dealt,
        is_critical,
        "attack landed"
    );

    CombatResult {
        damage_dealt,
        is_hit: true,
        is_critical,
        cooldown_remaining,
    }
}
