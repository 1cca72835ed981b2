//! Enemy roster loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{EnemyDecisionUnit, EnemyProfile, GameConfig};

use crate::loaders::{LoadResult, read_file};

/// Enemy roster structure for RON files.
///
/// ```ron
/// (
///     enemies: [
///         ("grunt", (max_health: 100.0)),
///         ("sniper", (max_health: 60.0, detection_range: Some(30.0), attack_range: Some(25.0))),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<(String, EnemyProfile)>,
}

/// Loader for enemy profiles from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy profiles from a RON file.
    ///
    /// Each profile is checked by building a unit from it, so a returned
    /// profile always spawns. Profiles whose attack range exceeds their
    /// detection range load with a warning.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<Vec<(String, EnemyProfile)>> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("Invalid enemy roster {}: {}", path.display(), e))
    }

    pub fn parse(content: &str, config: &GameConfig) -> LoadResult<Vec<(String, EnemyProfile)>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy roster RON: {}", e))?;

        for (name, profile) in &catalog.enemies {
            EnemyDecisionUnit::from_profile(profile, config)
                .map_err(|e| anyhow::anyhow!("Enemy '{}': {}", name, e))?;

            if !profile.ranges_consistent(config) {
                tracing::warn!(
                    enemy = %name,
                    attack_range = profile.resolved_attack_range(config),
                    detection_range = profile.resolved_detection_range(config),
                    "attack range exceeds detection range; chase will never trigger"
                );
            }
        }

        Ok(catalog.enemies)
    }
}
