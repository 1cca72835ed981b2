//! Per-tick encounter driver.

use std::collections::BTreeMap;

use skirmish_core::{
    AbilityState, AttackInput, BehaviorState, CombatEvent, DefenseInput, Element,
    EnemyDecisionUnit, EnemyProfile, EnemyUpdate, EntityId, GameConfig, MissionProgress,
    MissionSummary, Perception, RollSource, SkillId, Vec3, resolve_attack,
};

use crate::error::{EncounterError, Result};

/// One enemy taking part in the encounter.
#[derive(Clone, Debug, PartialEq)]
pub struct Combatant {
    pub unit: EnemyDecisionUnit,
    pub defense: DefenseInput,
    pub position: Vec3,
    /// Behavior decided on the most recent tick.
    pub state: BehaviorState,
}

/// Host readings for one enemy this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyReading {
    pub position: Vec3,
    pub perception: Perception,
}

/// A player attack as reported by the input layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerAttack {
    /// Skill to cast. When set, the skill's damage replaces `power`.
    pub skill: Option<SkillId>,
    pub accuracy: f32,
    pub power: f32,
    pub element: Element,
}

impl PlayerAttack {
    /// Basic attack with no skill.
    pub const fn basic(accuracy: f32, power: f32) -> Self {
        Self {
            skill: None,
            accuracy,
            power,
            element: Element::Null,
        }
    }

    pub const fn skill(id: SkillId, accuracy: f32, element: Element) -> Self {
        Self {
            skill: Some(id),
            accuracy,
            power: 0.0,
            element,
        }
    }
}

/// Everything the host applies after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Number of ticks processed, including this one.
    pub tick: u64,
    /// One update per enemy, in id order.
    pub updates: Vec<EnemyUpdate>,
    pub current_mana: f32,
}

/// A single fight: the player's ledger against a set of enemies.
pub struct Encounter<R: RollSource> {
    config: GameConfig,
    abilities: AbilityState,
    enemies: BTreeMap<EntityId, Combatant>,
    mission: Option<MissionProgress>,
    rng: R,
    combo: u32,
    tick: u64,
}

impl<R: RollSource> Encounter<R> {
    pub fn new(config: GameConfig, abilities: AbilityState, rng: R) -> Self {
        Self {
            config,
            abilities,
            enemies: BTreeMap::new(),
            mission: None,
            rng,
            combo: 0,
            tick: 0,
        }
    }

    /// Attaches a mission; every enemy killed by the player counts toward it.
    pub fn with_mission(mut self, mission: MissionProgress) -> Self {
        self.mission = Some(mission);
        self
    }

    /// Adds an enemy built from `profile` at full health.
    pub fn spawn(&mut self, id: EntityId, profile: &EnemyProfile, position: Vec3) -> Result<()> {
        if self.enemies.contains_key(&id) {
            return Err(EncounterError::DuplicateEnemy(id));
        }
        let unit = EnemyDecisionUnit::from_profile(profile, &self.config)?;
        self.enemies.insert(
            id,
            Combatant {
                unit,
                defense: profile.defense,
                position,
                state: BehaviorState::Idle,
            },
        );
        tracing::debug!(%id, max_health = profile.max_health, "enemy spawned");
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn abilities(&self) -> &AbilityState {
        &self.abilities
    }

    pub fn abilities_mut(&mut self) -> &mut AbilityState {
        &mut self.abilities
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Combatant> {
        self.enemies.get(&id)
    }

    pub fn enemies(&self) -> impl Iterator<Item = (&EntityId, &Combatant)> {
        self.enemies.iter()
    }

    /// Consecutive player hits since the last miss.
    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn mission(&self) -> Option<&MissionProgress> {
        self.mission.as_ref()
    }

    pub fn mission_summary(&self, time_remaining: f32) -> Option<MissionSummary> {
        self.mission
            .as_ref()
            .map(|mission| mission.summary(time_remaining))
    }

    /// Advances the encounter by one tick.
    ///
    /// Cooldowns and mana move first, then every enemy re-decides from its
    /// reading. Enemies without a reading this tick are treated as unaware of
    /// the player and keep their last known position.
    pub fn tick(
        &mut self,
        delta_time: f32,
        readings: &BTreeMap<EntityId, EnemyReading>,
    ) -> TickReport {
        self.tick += 1;
        self.abilities.tick(delta_time, self.config.mana_regen_rate);

        let mut updates = Vec::with_capacity(self.enemies.len());
        for (id, combatant) in self.enemies.iter_mut() {
            let perception = match readings.get(id) {
                Some(reading) => {
                    combatant.position = reading.position;
                    reading.perception
                }
                None => Perception::unaware(),
            };

            let state = combatant.unit.decide(&perception);
            if state != combatant.state {
                tracing::debug!(
                    %id,
                    from = %combatant.state,
                    to = %state,
                    "enemy behavior changed"
                );
            }
            combatant.state = state;

            updates.push(EnemyUpdate::from_unit(
                *id,
                combatant.position,
                &combatant.unit,
                state,
            ));
        }

        TickReport {
            tick: self.tick,
            updates,
            current_mana: self.abilities.current_mana(),
        }
    }

    /// Resolves a player attack on `target`.
    ///
    /// Returns `Ok(None)` when the requested skill is unusable; nothing changes
    /// in that case. A hit extends the combo, a miss resets it. A killing blow
    /// counts toward the mission.
    pub fn player_attack(
        &mut self,
        target: EntityId,
        attack: &PlayerAttack,
    ) -> Result<Option<CombatEvent>> {
        let defense = self.living_enemy(target)?.defense;

        let (power, cooldown_remaining) = match attack.skill {
            Some(skill_id) => match self.abilities.cast(skill_id) {
                Some(skill) => (skill.damage(), skill.cooldown_remaining()),
                None => return Ok(None),
            },
            None => (attack.power, 0.0),
        };

        let input = AttackInput::new(attack.accuracy, power)
            .with_element(attack.element)
            .with_combo(self.combo);
        let result = resolve_attack(
            &input,
            &defense,
            cooldown_remaining,
            &self.config.combat,
            &mut self.rng,
        );

        self.combo = if result.is_hit {
            self.combo.saturating_add(1)
        } else {
            0
        };

        let combatant = self
            .enemies
            .get_mut(&target)
            .ok_or(EncounterError::UnknownEnemy(target))?;
        if combatant.unit.apply_result(&result) {
            combatant.state = BehaviorState::Dead;
            if let Some(mission) = self.mission.as_mut() {
                mission.record_elimination();
            }
            tracing::info!(%target, "enemy eliminated");
        }

        Ok(Some(CombatEvent::from_result(EntityId::PLAYER, target, &result)))
    }

    /// Resolves an enemy attack on the player.
    ///
    /// Only enemies whose latest decision was [`BehaviorState::Attack`] may
    /// strike; otherwise `Ok(None)`. Player health is host-owned, so the
    /// damage is only reported.
    pub fn enemy_attack(
        &mut self,
        attacker: EntityId,
        attack: &AttackInput,
        player_defense: &DefenseInput,
    ) -> Result<Option<CombatEvent>> {
        let combatant = self.living_enemy(attacker)?;
        if combatant.state != BehaviorState::Attack {
            return Ok(None);
        }

        let result = resolve_attack(
            attack,
            player_defense,
            0.0,
            &self.config.combat,
            &mut self.rng,
        );
        Ok(Some(CombatEvent::from_result(
            attacker,
            EntityId::PLAYER,
            &result,
        )))
    }

    fn living_enemy(&self, id: EntityId) -> Result<&Combatant> {
        let combatant = self
            .enemies
            .get(&id)
            .ok_or(EncounterError::UnknownEnemy(id))?;
        if combatant.unit.is_dead() {
            return Err(EncounterError::TargetDead(id));
        }
        Ok(combatant)
    }
}
