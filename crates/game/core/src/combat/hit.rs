//! Hit chance and accuracy calculations.

use crate::config::CombatTables;
use crate::env::RollSource;

/// Calculate hit chance based on accuracy vs evasion.
///
/// # Formula
///
/// ```text
/// hit_chance = (accuracy - evasion) / 100
/// clamped to [min, max]   (default [0.10, 0.95])
/// ```
///
/// The bounds hold for every input, including NaN, which lands on the floor.
pub fn hit_chance(accuracy: f32, evasion: f32, tables: &CombatTables) -> f32 {
    let params = tables.hit_chance;
    let raw = (accuracy - evasion) / 100.0;

    // max/min (not clamp) so NaN falls to the floor instead of propagating
    raw.max(params.min).min(params.max)
}

/// Check if an attack hits.
///
/// Consumes exactly one roll; the attack lands iff the roll is strictly below
/// the hit chance.
pub fn evaluate_hit(
    accuracy: f32,
    evasion: f32,
    tables: &CombatTables,
    rng: &mut impl RollSource,
) -> bool {
    let chance = hit_chance(accuracy, evasion, tables);
    rng.next_unit() < chance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedRolls;

    #[test]
    fn chance_is_floored_for_hopeless_attacks() {
        let tables = CombatTables::default();
        assert_eq!(hit_chance(0.0, 500.0, &tables), 0.10);
        assert_eq!(hit_chance(f32::NAN, 0.0, &tables), 0.10);
    }

    #[test]
    fn chance_is_capped_for_perfect_attacks() {
        let tables = CombatTables::default();
        assert_eq!(hit_chance(1_000.0, 0.0, &tables), 0.95);
        assert_eq!(hit_chance(f32::INFINITY, 0.0, &tables), 0.95);
    }

    #[test]
    fn chance_is_linear_between_bounds() {
        let tables = CombatTables::default();
        let chance = hit_chance(80.0, 30.0, &tables);
        assert!((chance - 0.5).abs() < 1e-6);
    }

    #[test]
    fn chance_stays_bounded_across_input_grid() {
        let tables = CombatTables::default();
        for accuracy in (-200..=300).step_by(25) {
            for evasion in (-200..=300).step_by(25) {
                let chance = hit_chance(accuracy as f32, evasion as f32, &tables);
                assert!((0.10..=0.95).contains(&chance));
            }
        }
    }

    #[test]
    fn roll_below_chance_hits() {
        let tables = CombatTables::default();
        let mut rolls = FixedRolls::new([0.49, 0.5]);
        assert!(evaluate_hit(80.0, 30.0, &tables, &mut rolls));
        assert!(!evaluate_hit(80.0, 30.0, &tables, &mut rolls));
    }

    #[test]
    fn floor_keeps_lucky_rolls_landing() {
        let tables = CombatTables::default();
        let mut rolls = FixedRolls::new([0.05]);
        assert!(evaluate_hit(0.0, 100.0, &tables, &mut rolls));
    }

    #[test]
    fn ceiling_keeps_unlucky_rolls_missing() {
        let tables = CombatTables::default();
        let mut rolls = FixedRolls::new([0.96]);
        assert!(!evaluate_hit(500.0, 0.0, &tables, &mut rolls));
    }
}
