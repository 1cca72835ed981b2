//! Content factory for loading a whole content directory.

use std::path::{Path, PathBuf};

use skirmish_core::{AbilityState, EnemyProfile, GameConfig};

use crate::loaders::{ConfigLoader, EnemyLoader, LoadResult, SkillLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron
/// └── enemies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the player's skill book from `skills.ron`.
    pub fn load_skills(&self, config: &GameConfig) -> LoadResult<AbilityState> {
        let path = self.data_dir.join("skills.ron");
        SkillLoader::load(&path, config)
    }

    /// Load enemy profiles from `enemies.ron`.
    pub fn load_enemies(&self, config: &GameConfig) -> LoadResult<Vec<(String, EnemyProfile)>> {
        let path = self.data_dir.join("enemies.ron");
        EnemyLoader::load(&path, config)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_content_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "max_mana = 80.0\n").unwrap();
        std::fs::write(
            dir.path().join("skills.ron"),
            "(skills: [(id: 1, cooldown: 3.0, mana_cost: 10.0, damage: 25.0)])",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("enemies.ron"),
            r#"(enemies: [("grunt", (max_health: 100.0))])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().unwrap();
        let skills = factory.load_skills(&config).unwrap();
        let enemies = factory.load_enemies(&config).unwrap();

        assert_eq!(config.max_mana, 80.0);
        assert_eq!(skills.max_mana(), 80.0);
        assert_eq!(skills.len(), 1);
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContentFactory::new(dir.path()).load_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn missing_skill_book_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_skills(&GameConfig::default()).is_err());
    }
}
