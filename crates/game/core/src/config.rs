//! Game configuration and combat balance tables.
//!
//! Every constant the combat formulas use lives in [`CombatTables`] so a host
//! can tune balance from a content file without touching code. The `Default`
//! values are the canonical rules.

/// Hit chance bounds. Raw chance is `(accuracy - evasion) / 100`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitChanceParams {
    /// Fairness floor: even a hopeless attack lands this often.
    pub min: f32,
    /// Ceiling: even a perfect attack misses sometimes.
    pub max: f32,
}

impl HitChanceParams {
    /// Lowest floor a table may configure.
    pub const FLOOR: f32 = 0.10;
    /// Highest ceiling a table may configure.
    pub const CEILING: f32 = 0.95;
}

impl Default for HitChanceParams {
    fn default() -> Self {
        Self {
            min: Self::FLOOR,
            max: Self::CEILING,
        }
    }
}

/// Damage formula parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageParams {
    /// Fraction of damage removed per point of defense.
    pub defense_scale: f32,
    pub crit_multiplier: f32,
    /// Probability in `[0, 1]` that a landed hit is critical.
    pub crit_chance: f32,
    /// Floor applied after every other modifier of the base formula.
    pub minimum: f32,
}

impl DamageParams {
    /// Lowest damage floor a table may configure.
    pub const FLOOR: f32 = 1.0;
}

impl Default for DamageParams {
    fn default() -> Self {
        Self {
            defense_scale: 0.01,
            crit_multiplier: 1.5,
            crit_chance: 0.0,
            minimum: Self::FLOOR,
        }
    }
}

/// Multipliers of the cyclic element table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElementalParams {
    pub advantage: f32,
    pub disadvantage: f32,
}

impl Default for ElementalParams {
    fn default() -> Self {
        Self {
            advantage: 1.5,
            disadvantage: 0.5,
        }
    }
}

/// Balance tables consulted by [`crate::combat`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTables {
    pub hit_chance: HitChanceParams,
    pub damage: DamageParams,
    pub elemental: ElementalParams,
    /// Bonus per consecutive hit: multiplier is `1 + combo_step * combo`.
    pub combo_step: f32,
}

impl Default for CombatTables {
    fn default() -> Self {
        Self {
            hit_chance: HitChanceParams::default(),
            damage: DamageParams::default(),
            elemental: ElementalParams::default(),
            combo_step: 0.1,
        }
    }
}

impl CombatTables {
    /// Checks the tables for values that would break the formulas' contracts.
    ///
    /// Tuning may tighten the hit window and raise the damage floor, never
    /// widen or lower them: hit chance stays within `[0.10, 0.95]` and base
    /// damage stays at least `1.0` for every input. Returns the first
    /// offending field.
    pub fn validate(&self) -> Result<(), &'static str> {
        let hit = self.hit_chance;
        if hit.min.is_nan() || hit.min < HitChanceParams::FLOOR {
            return Err("hit_chance.min must be at least 0.10");
        }
        if hit.max.is_nan() || hit.max > HitChanceParams::CEILING {
            return Err("hit_chance.max must be at most 0.95");
        }
        if hit.min > hit.max {
            return Err("hit_chance.min must not exceed hit_chance.max");
        }
        if !(0.0..=1.0).contains(&self.damage.crit_chance) {
            return Err("damage.crit_chance must lie in [0, 1]");
        }
        if self.damage.minimum.is_nan() || self.damage.minimum < DamageParams::FLOOR {
            return Err("damage.minimum must be at least 1.0");
        }
        if self.damage.crit_multiplier < 1.0 {
            return Err("damage.crit_multiplier must be at least 1");
        }
        if self.combo_step < 0.0 {
            return Err("combo_step must not be negative");
        }
        Ok(())
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Mana pool of a freshly created player ledger.
    pub max_mana: f32,
    /// Mana regenerated per second of simulation time.
    pub mana_regen_rate: f32,
    /// Enemy ranges used when a profile does not specify its own.
    pub detection_range: f32,
    pub attack_range: f32,
    /// Health fraction below which an enemy is disabled.
    pub stun_threshold: f32,
    pub combat: CombatTables,
}

impl GameConfig {
    pub const DEFAULT_MAX_MANA: f32 = 100.0;
    pub const DEFAULT_MANA_REGEN_RATE: f32 = 5.0;
    pub const DEFAULT_DETECTION_RANGE: f32 = 15.0;
    pub const DEFAULT_ATTACK_RANGE: f32 = 3.0;
    pub const DEFAULT_STUN_THRESHOLD: f32 = 0.2;

    pub fn new() -> Self {
        Self {
            max_mana: Self::DEFAULT_MAX_MANA,
            mana_regen_rate: Self::DEFAULT_MANA_REGEN_RATE,
            detection_range: Self::DEFAULT_DETECTION_RANGE,
            attack_range: Self::DEFAULT_ATTACK_RANGE,
            stun_threshold: Self::DEFAULT_STUN_THRESHOLD,
            combat: CombatTables::default(),
        }
    }

    pub fn with_mana_regen_rate(mut self, rate: f32) -> Self {
        self.mana_regen_rate = rate;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
