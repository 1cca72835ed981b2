//! Damage calculation and application.

use crate::config::CombatTables;

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// damage = base_power * (1 - defense_scale * target_defense)
///
/// if critical:
///     damage *= crit_multiplier
///
/// final_damage = max(damage, minimum)
/// ```
///
/// The floor guarantees forward progress against any defense, including
/// values above 100 that would otherwise turn the formula negative.
pub fn calculate_damage(
    base_power: f32,
    target_defense: f32,
    is_critical: bool,
    tables: &CombatTables,
) -> f32 {
    let params = tables.damage;

    let mut damage = base_power * (1.0 - params.defense_scale * target_defense);

    if is_critical {
        damage *= params.crit_multiplier;
    }

    damage.max(params.minimum)
}

/// Damage multiplier for a chain of consecutive hits.
///
/// `1 + combo_step * combo`. Deliberately unbounded; callers that want a cap
/// apply it themselves.
pub fn combo_multiplier(combo: u32, tables: &CombatTables) -> f32 {
    1.0 + tables.combo_step * combo as f32
}

/// Apply damage to current health, clamped to 0.
///
/// Negative amounts are treated as 0; healing goes through its own path.
pub fn apply_damage(current_health: f32, amount: f32) -> f32 {
    (current_health - amount.max(0.0)).max(0.0)
}
