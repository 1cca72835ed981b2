//! Health-gated decision procedure.

use super::{BehaviorState, EnemyDecisionUnit};

/// What the host measured for one enemy this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perception {
    pub distance_to_target: f32,
    pub has_line_of_sight: bool,
}

impl Perception {
    pub const fn new(distance_to_target: f32, has_line_of_sight: bool) -> Self {
        Self {
            distance_to_target,
            has_line_of_sight,
        }
    }

    /// No target anywhere in sight.
    pub const fn unaware() -> Self {
        Self {
            distance_to_target: f32::INFINITY,
            has_line_of_sight: false,
        }
    }
}

/// Decides this tick's behavior from current health and readings.
///
/// # Decision Process
///
/// First match wins:
///
/// 1. **Dead**: health at or below zero
/// 2. **Stunned**: health below `stun_threshold` of max, regardless of the target
/// 3. **Attack**: target closer than `attack_range` and visible
/// 4. **Chase**: target closer than `detection_range` and visible
/// 5. **Patrol**: otherwise
///
/// `attack_range <= detection_range` is not enforced. If it is violated,
/// the attack check shadows the chase check and Chase is never produced.
pub fn decide(unit: &EnemyDecisionUnit, perception: &Perception) -> BehaviorState {
    let health = unit.current_health();

    let state = if health <= 0.0 {
        BehaviorState::Dead
    } else if health < unit.max_health() * unit.stun_threshold() {
        BehaviorState::Stunned
    } else if perception.has_line_of_sight
        && perception.distance_to_target < unit.attack_range()
    {
        BehaviorState::Attack
    } else if perception.has_line_of_sight
        && perception.distance_to_target < unit.detection_range()
    {
        BehaviorState::Chase
    } else {
        BehaviorState::Patrol
    };

    tracing::trace!(
        health,
        distance = perception.distance_to_target,
        visible = perception.has_line_of_sight,
        %state,
        "enemy decision"
    );

    state
}
