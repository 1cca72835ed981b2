use crate::combat::DefenseInput;
use crate::config::GameConfig;

/// Authored description of an enemy type.
///
/// Unset ranges and thresholds fall back to [`GameConfig`] when a unit is
/// built from the profile.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyProfile {
    pub max_health: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub detection_range: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_range: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stun_threshold: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: DefenseInput,
}

impl EnemyProfile {
    pub const fn new(max_health: f32) -> Self {
        Self {
            max_health,
            detection_range: None,
            attack_range: None,
            stun_threshold: None,
            defense: DefenseInput {
                evasion: 0.0,
                defense: 0.0,
                element: crate::combat::Element::Null,
            },
        }
    }

    pub fn resolved_detection_range(&self, config: &GameConfig) -> f32 {
        self.detection_range.unwrap_or(config.detection_range)
    }

    pub fn resolved_attack_range(&self, config: &GameConfig) -> f32 {
        self.attack_range.unwrap_or(config.attack_range)
    }

    pub fn resolved_stun_threshold(&self, config: &GameConfig) -> f32 {
        self.stun_threshold.unwrap_or(config.stun_threshold)
    }

    /// Whether the attack range fits inside the detection range.
    ///
    /// Not enforced anywhere; loaders use it to warn about likely typos.
    pub fn ranges_consistent(&self, config: &GameConfig) -> bool {
        self.resolved_attack_range(config) <= self.resolved_detection_range(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_fall_back_to_config() {
        let config = GameConfig::default();
        let profile = EnemyProfile::new(50.0);
        assert_eq!(profile.resolved_detection_range(&config), 15.0);
        assert_eq!(profile.resolved_attack_range(&config), 3.0);
        assert_eq!(profile.resolved_stun_threshold(&config), 0.2);
        assert!(profile.ranges_consistent(&config));
    }

    #[test]
    fn long_reach_profile_is_flagged() {
        let config = GameConfig::default();
        let profile = EnemyProfile {
            attack_range: Some(20.0),
            ..EnemyProfile::new(50.0)
        };
        assert!(!profile.ranges_consistent(&config));
    }
}
