use crate::combat::{CombatResult, apply_damage};
use crate::config::GameConfig;

use super::{BehaviorState, EnemyError, EnemyProfile, Perception, decide};

/// Health and perception ranges of one enemy.
///
/// Invariant: `0 <= current_health <= max_health`, `max_health > 0`.
/// Health only changes through [`take_damage`](Self::take_damage),
/// [`heal`](Self::heal) and [`apply_result`](Self::apply_result). Reaching
/// zero makes the enemy [`BehaviorState::Dead`]; the host owns despawning.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyDecisionUnit {
    current_health: f32,
    max_health: f32,
    detection_range: f32,
    attack_range: f32,
    stun_threshold: f32,
}

impl EnemyDecisionUnit {
    /// Creates a unit at full health with the default ranges.
    pub fn new(max_health: f32) -> Result<Self, EnemyError> {
        if !max_health.is_finite() || max_health <= 0.0 {
            return Err(EnemyError::InvalidMaxHealth(max_health));
        }
        Ok(Self {
            current_health: max_health,
            max_health,
            detection_range: GameConfig::DEFAULT_DETECTION_RANGE,
            attack_range: GameConfig::DEFAULT_ATTACK_RANGE,
            stun_threshold: GameConfig::DEFAULT_STUN_THRESHOLD,
        })
    }

    pub fn from_profile(profile: &EnemyProfile, config: &GameConfig) -> Result<Self, EnemyError> {
        Self::new(profile.max_health)?
            .with_ranges(
                profile.resolved_detection_range(config),
                profile.resolved_attack_range(config),
            )?
            .with_stun_threshold(profile.resolved_stun_threshold(config))
    }

    /// Sets both ranges. Their relative order is not checked.
    pub fn with_ranges(
        mut self,
        detection_range: f32,
        attack_range: f32,
    ) -> Result<Self, EnemyError> {
        self.detection_range = non_negative("detection_range", detection_range)?;
        self.attack_range = non_negative("attack_range", attack_range)?;
        Ok(self)
    }

    /// Sets the health fraction below which the unit is stunned, in `[0, 1]`.
    pub fn with_stun_threshold(mut self, threshold: f32) -> Result<Self, EnemyError> {
        let threshold = non_negative("stun_threshold", threshold)?;
        if threshold > 1.0 {
            return Err(EnemyError::InvalidParameter {
                field: "stun_threshold",
                value: threshold,
            });
        }
        self.stun_threshold = threshold;
        Ok(self)
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn detection_range(&self) -> f32 {
        self.detection_range
    }

    pub fn attack_range(&self) -> f32 {
        self.attack_range
    }

    pub fn stun_threshold(&self) -> f32 {
        self.stun_threshold
    }

    /// Current health as a fraction of max, in `[0, 1]`.
    pub fn health_fraction(&self) -> f32 {
        self.current_health / self.max_health
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0.0
    }

    /// See [`decide`].
    pub fn decide(&self, perception: &Perception) -> BehaviorState {
        decide(self, perception)
    }

    /// Reduces health, never below zero. Negative amounts do nothing.
    pub fn take_damage(&mut self, amount: f32) {
        self.current_health = apply_damage(self.current_health, amount);
    }

    /// Restores health, never above max. Negative amounts do nothing.
    pub fn heal(&mut self, amount: f32) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        self.current_health = (self.current_health + amount).min(self.max_health);
    }

    /// Applies a resolved attack against this unit. Misses change nothing.
    ///
    /// Returns true if this attack is the one that killed the unit.
    pub fn apply_result(&mut self, result: &CombatResult) -> bool {
        if !result.is_hit {
            return false;
        }
        let was_alive = !self.is_dead();
        self.take_damage(result.damage_dealt);
        was_alive && self.is_dead()
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, EnemyError> {
    if value.is_nan() || value < 0.0 {
        return Err(EnemyError::InvalidParameter { field, value });
    }
    Ok(value)
}
