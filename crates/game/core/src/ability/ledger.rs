use std::collections::BTreeMap;

use crate::types::SkillId;

use super::{AbilityError, Skill, SkillSpec};

/// Why a skill use did or did not go through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UseOutcome {
    /// Mana deducted and cooldown restarted.
    Used,
    /// No skill registered under this id.
    UnknownSkill,
    OnCooldown { remaining: f32 },
    InsufficientMana { required: f32, available: f32 },
}

impl UseOutcome {
    pub fn is_used(self) -> bool {
        matches!(self, UseOutcome::Used)
    }
}

/// Per-character skill ledger: every registered skill plus the mana pool.
///
/// Invariants: `0 <= current_mana <= max_mana`, and every skill keeps
/// `0 <= cooldown_remaining <= cooldown`. No per-tick operation can fail;
/// unknown ids and unusable skills leave the ledger untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct AbilityState {
    skills: BTreeMap<SkillId, Skill>,
    current_mana: f32,
    max_mana: f32,
}

impl AbilityState {
    pub const DEFAULT_MAX_MANA: f32 = 100.0;

    /// Creates an empty ledger with a full mana pool.
    pub fn new(max_mana: f32) -> Result<Self, AbilityError> {
        if !max_mana.is_finite() || max_mana < 0.0 {
            return Err(AbilityError::InvalidManaPool(max_mana));
        }
        Ok(Self {
            skills: BTreeMap::new(),
            current_mana: max_mana,
            max_mana,
        })
    }

    /// Overrides the starting mana, clamped into `[0, max_mana]`.
    pub fn with_current_mana(mut self, mana: f32) -> Self {
        self.current_mana = mana.max(0.0).min(self.max_mana);
        self
    }

    /// Registers a skill. Registration happens before play; ids are unique.
    pub fn register(&mut self, spec: SkillSpec) -> Result<(), AbilityError> {
        if self.skills.contains_key(&spec.id) {
            return Err(AbilityError::DuplicateSkill(spec.id));
        }
        let skill = Skill::new(spec)?;
        self.skills.insert(spec.id, skill);
        Ok(())
    }

    pub fn current_mana(&self) -> f32 {
        self.current_mana
    }

    pub fn max_mana(&self) -> f32 {
        self.max_mana
    }

    /// Existence check, separate from usability.
    pub fn contains(&self, id: SkillId) -> bool {
        self.skills.contains_key(&id)
    }

    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.get(&id)
    }

    /// Mutable access for host-owned flags such as [`Skill::set_active`].
    pub fn skill_mut(&mut self, id: SkillId) -> Option<&mut Skill> {
        self.skills.get_mut(&id)
    }

    /// Skills in id order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// True iff the skill exists, its cooldown has elapsed and the pool
    /// covers its mana cost. Unknown ids are simply unusable.
    pub fn can_use(&self, id: SkillId) -> bool {
        self.blocker(id).is_none()
    }

    /// Uses the skill if it is usable right now; otherwise does nothing.
    ///
    /// Safe to call speculatively, and idempotent while on cooldown.
    pub fn use_skill(&mut self, id: SkillId) {
        let _ = self.try_use(id);
    }

    /// Same as [`use_skill`](Self::use_skill) but reports the reason a use was refused.
    pub fn try_use(&mut self, id: SkillId) -> UseOutcome {
        if let Some(reason) = self.blocker(id) {
            tracing::trace!(%id, ?reason, "skill use refused");
            return reason;
        }

        if let Some(skill) = self.skills.get_mut(&id) {
            self.current_mana -= skill.mana_cost();
            skill.start_cooldown();
            tracing::debug!(
                %id,
                mana = self.current_mana,
                cooldown = skill.cooldown(),
                "skill used"
            );
        }
        UseOutcome::Used
    }

    /// Uses the skill and, if it fired, returns a snapshot of it taken right
    /// after use (full cooldown, damage to feed into an attack).
    pub fn cast(&mut self, id: SkillId) -> Option<Skill> {
        if self.try_use(id).is_used() {
            self.skills.get(&id).copied()
        } else {
            None
        }
    }

    /// Counts every cooldown down by `delta_time`, never below zero.
    ///
    /// A zero delta is a no-op. Negative or NaN deltas are treated as zero.
    pub fn advance_cooldowns(&mut self, delta_time: f32) {
        if delta_time.is_nan() || delta_time < 0.0 {
            tracing::warn!(delta_time, "ignoring invalid cooldown delta");
            return;
        }
        if delta_time == 0.0 {
            return;
        }
        for skill in self.skills.values_mut() {
            skill.tick(delta_time);
        }
    }

    /// Adds `rate * delta_time` mana, capped at the pool maximum.
    ///
    /// Regeneration never drains: a negative or NaN gain is ignored.
    pub fn regenerate_mana(&mut self, rate: f32, delta_time: f32) {
        let gain = rate * delta_time;
        if gain.is_nan() || gain <= 0.0 {
            return;
        }
        self.current_mana = (self.current_mana + gain).min(self.max_mana);
    }

    /// One simulation tick: cooldowns then regeneration.
    pub fn tick(&mut self, delta_time: f32, regen_rate: f32) {
        self.advance_cooldowns(delta_time);
        self.regenerate_mana(regen_rate, delta_time);
    }

    fn blocker(&self, id: SkillId) -> Option<UseOutcome> {
        let Some(skill) = self.skills.get(&id) else {
            return Some(UseOutcome::UnknownSkill);
        };
        if !skill.is_ready() {
            return Some(UseOutcome::OnCooldown {
                remaining: skill.cooldown_remaining(),
            });
        }
        if self.current_mana < skill.mana_cost() {
            return Some(UseOutcome::InsufficientMana {
                required: skill.mana_cost(),
                available: self.current_mana,
            });
        }
        None
    }
}

impl Default for AbilityState {
    fn default() -> Self {
        Self {
            skills: BTreeMap::new(),
            current_mana: Self::DEFAULT_MAX_MANA,
            max_mana: Self::DEFAULT_MAX_MANA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIREBALL: SkillId = SkillId(1);
    const NOVA: SkillId = SkillId(2);

    fn ledger() -> AbilityState {
        let mut state = AbilityState::new(100.0).unwrap();
        state.register(SkillSpec::new(1, 5.0, 20.0, 40.0)).unwrap();
        state.register(SkillSpec::new(2, 12.0, 90.0, 120.0)).unwrap();
        state
    }

    #[test]
    fn use_cooldown_and_recover_cycle() {
        let mut state = ledger();

        state.use_skill(FIREBALL);
        assert_eq!(state.skill(FIREBALL).unwrap().cooldown_remaining(), 5.0);
        assert_eq!(state.current_mana(), 80.0);

        state.use_skill(FIREBALL);
        assert_eq!(state.skill(FIREBALL).unwrap().cooldown_remaining(), 5.0);
        assert_eq!(state.current_mana(), 80.0);

        state.advance_cooldowns(5.0);
        assert_eq!(state.skill(FIREBALL).unwrap().cooldown_remaining(), 0.0);
        assert!(state.can_use(FIREBALL));

        state.use_skill(FIREBALL);
        assert_eq!(state.current_mana(), 60.0);
    }

    #[test]
    fn use_on_cooldown_changes_nothing() {
        let mut state = ledger();
        state.use_skill(FIREBALL);
        state.advance_cooldowns(1.0);
        let before = state.clone();

        for _ in 0..3 {
            state.use_skill(FIREBALL);
        }

        assert_eq!(state, before);
    }

    #[test]
    fn unknown_skill_is_silent_noop() {
        let mut state = ledger();
        let before = state.clone();

        assert!(!state.can_use(SkillId(99)));
        state.use_skill(SkillId(99));

        assert_eq!(state, before);
        assert!(!state.contains(SkillId(99)));
    }

    #[test]
    fn try_use_reports_reason() {
        let mut state = ledger();

        assert_eq!(state.try_use(SkillId(99)), UseOutcome::UnknownSkill);
        assert_eq!(state.try_use(FIREBALL), UseOutcome::Used);
        assert_eq!(
            state.try_use(FIREBALL),
            UseOutcome::OnCooldown { remaining: 5.0 }
        );
        assert_eq!(
            state.try_use(NOVA),
            UseOutcome::InsufficientMana {
                required: 90.0,
                available: 80.0,
            }
        );
    }

    #[test]
    fn insufficient_mana_blocks_use() {
        let mut state = ledger().with_current_mana(50.0);
        let before = state.clone();

        assert!(!state.can_use(NOVA));
        state.use_skill(NOVA);

        assert_eq!(state, before);
    }

    #[test]
    fn exact_mana_is_enough() {
        let mut state = ledger().with_current_mana(90.0);
        assert!(state.can_use(NOVA));
        state.use_skill(NOVA);
        assert_eq!(state.current_mana(), 0.0);
    }

    #[test]
    fn cast_returns_skill_after_use() {
        let mut state = ledger();

        let cast = state.cast(FIREBALL).unwrap();
        assert_eq!(cast.damage(), 40.0);
        assert_eq!(cast.cooldown_remaining(), 5.0);

        assert!(state.cast(FIREBALL).is_none());
    }

    #[test]
    fn cooldowns_never_go_negative() {
        let mut state = ledger();
        state.use_skill(FIREBALL);

        for _ in 0..10 {
            state.advance_cooldowns(2.0);
            for skill in state.skills() {
                assert!(skill.cooldown_remaining() >= 0.0);
            }
        }
        assert_eq!(state.skill(FIREBALL).unwrap().cooldown_remaining(), 0.0);
    }

    #[test]
    fn zero_and_negative_deltas_are_noops() {
        let mut state = ledger();
        state.use_skill(FIREBALL);
        let before = state.clone();

        state.advance_cooldowns(0.0);
        state.advance_cooldowns(-3.0);
        state.advance_cooldowns(f32::NAN);

        assert_eq!(state, before);
    }

    #[test]
    fn regeneration_caps_at_max() {
        let mut state = ledger().with_current_mana(10.0);

        state.regenerate_mana(5.0, 2.0);
        assert_eq!(state.current_mana(), 20.0);

        for _ in 0..100 {
            state.regenerate_mana(50.0, 1.0);
            assert!(state.current_mana() <= state.max_mana());
        }
        assert_eq!(state.current_mana(), 100.0);
    }

    #[test]
    fn regeneration_never_drains() {
        let mut state = ledger().with_current_mana(40.0);
        state.regenerate_mana(-10.0, 1.0);
        state.regenerate_mana(10.0, -1.0);
        assert_eq!(state.current_mana(), 40.0);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut state = ledger();
        let err = state.register(SkillSpec::new(1, 1.0, 1.0, 1.0)).unwrap_err();
        assert_eq!(err, AbilityError::DuplicateSkill(FIREBALL));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn invalid_pool_is_rejected() {
        assert_eq!(
            AbilityState::new(-5.0).unwrap_err(),
            AbilityError::InvalidManaPool(-5.0)
        );
    }

    #[test]
    fn default_ledger_has_full_hundred_mana() {
        let state = AbilityState::default();
        assert_eq!(state.current_mana(), 100.0);
        assert_eq!(state.max_mana(), 100.0);
        assert!(state.is_empty());
    }

    #[test]
    fn tick_advances_and_regenerates() {
        let mut state = ledger();
        state.use_skill(FIREBALL);

        state.tick(2.0, 5.0);

        assert_eq!(state.skill(FIREBALL).unwrap().cooldown_remaining(), 3.0);
        assert_eq!(state.current_mana(), 90.0);
    }
}
