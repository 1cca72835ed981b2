use crate::types::SkillId;

use super::AbilityError;

/// Static definition of a skill, as authored in content files.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSpec {
    pub id: SkillId,
    /// Seconds between uses.
    pub cooldown: f32,
    pub mana_cost: f32,
    pub damage: f32,
}

impl SkillSpec {
    pub const fn new(id: u32, cooldown: f32, mana_cost: f32, damage: f32) -> Self {
        Self {
            id: SkillId(id),
            cooldown,
            mana_cost,
            damage,
        }
    }
}

/// A registered skill and its live cooldown.
///
/// Invariant: `0 <= cooldown_remaining <= cooldown`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    id: SkillId,
    cooldown: f32,
    cooldown_remaining: f32,
    mana_cost: f32,
    damage: f32,
    is_active: bool,
}

impl Skill {
    /// Builds a ready-to-use skill from its definition.
    pub fn new(spec: SkillSpec) -> Result<Self, AbilityError> {
        let check = |field: &'static str, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(AbilityError::InvalidSkill {
                    id: spec.id,
                    field,
                    value,
                })
            }
        };
        check("cooldown", spec.cooldown)?;
        check("mana_cost", spec.mana_cost)?;
        check("damage", spec.damage)?;

        Ok(Self {
            id: spec.id,
            cooldown: spec.cooldown,
            cooldown_remaining: 0.0,
            mana_cost: spec.mana_cost,
            damage: spec.damage,
            is_active: true,
        })
    }

    pub fn id(&self) -> SkillId {
        self.id
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn mana_cost(&self) -> f32 {
        self.mana_cost
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }

    /// Host-owned toggle (e.g. hidden from the hotbar). The ledger carries it
    /// but does not consult it when deciding usability.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// True once the cooldown has fully elapsed.
    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining <= 0.0
    }

    pub(super) fn start_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown;
    }

    /// Caller guarantees `delta_time >= 0`.
    pub(super) fn tick(&mut self, delta_time: f32) {
        self.cooldown_remaining = (self.cooldown_remaining - delta_time).max(0.0);
    }
}
