//! Data contracts exchanged with the host's network layer.
//!
//! Plain values with no validation. Encoding them is the transport's job; with
//! the `serde` feature enabled they derive `Serialize`/`Deserialize` so any
//! serde format can carry them.

use crate::combat::CombatResult;
use crate::enemy::{BehaviorState, EnemyDecisionUnit, EnemyError};
use crate::types::{EntityId, Rotation, Vec3};

/// Player state snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Vec3,
    pub rotation: Rotation,
    pub health: f32,
    pub stamina: f32,
    /// Host-defined animation code.
    pub animation_state: i32,
}

/// Per-tick enemy update.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyUpdate {
    pub enemy_id: EntityId,
    pub position: Vec3,
    /// [`BehaviorState`] code.
    pub state: u8,
    pub health_fraction: f32,
}

impl EnemyUpdate {
    pub fn from_unit(
        enemy_id: EntityId,
        position: Vec3,
        unit: &EnemyDecisionUnit,
        state: BehaviorState,
    ) -> Self {
        Self {
            enemy_id,
            position,
            state: state.code(),
            health_fraction: unit.health_fraction(),
        }
    }

    pub fn behavior_state(&self) -> Result<BehaviorState, EnemyError> {
        BehaviorState::try_from(self.state)
    }
}

/// A landed or missed attack between two entities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEvent {
    pub attacker_id: EntityId,
    pub target_id: EntityId,
    pub damage_dealt: f32,
    pub is_critical: bool,
}

impl CombatEvent {
    pub fn from_result(attacker_id: EntityId, target_id: EntityId, result: &CombatResult) -> Self {
        Self {
            attacker_id,
            target_id,
            damage_dealt: result.damage_dealt,
            is_critical: result.is_critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_update_carries_state_code_and_fraction() {
        let mut unit = EnemyDecisionUnit::new(200.0).unwrap();
        unit.take_damage(50.0);

        let update = EnemyUpdate::from_unit(
            EntityId(4),
            Vec3::new(1.0, 0.0, -2.0),
            &unit,
            BehaviorState::Chase,
        );

        assert_eq!(update.state, 2);
        assert_eq!(update.health_fraction, 0.75);
        assert_eq!(update.behavior_state(), Ok(BehaviorState::Chase));
    }

    #[test]
    fn combat_event_copies_result() {
        let result = CombatResult {
            damage_dealt: 12.5,
            is_hit: true,
            is_critical: true,
            cooldown_remaining: 3.0,
        };
        let event = CombatEvent::from_result(EntityId::PLAYER, EntityId(9), &result);
        assert_eq!(event.damage_dealt, 12.5);
        assert!(event.is_critical);
        assert!(event.attacker_id.is_player());
    }
}
