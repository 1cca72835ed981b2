//! Game configuration loader.

use std::path::Path;

use skirmish_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every field is optional; missing ones keep their [`GameConfig::default`]
/// value. The combat tables are validated before the config is returned.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config
            .combat
            .validate()
            .map_err(|reason| anyhow::anyhow!("Invalid combat tables: {}", reason))?;

        if config.max_mana < 0.0 || config.mana_regen_rate < 0.0 {
            anyhow::bail!("mana values must not be negative");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
            mana_regen_rate = 8.0

            [combat]
            combo_step = 0.25

            [combat.damage]
            crit_chance = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.mana_regen_rate, 8.0);
        assert_eq!(config.max_mana, 100.0);
        assert_eq!(config.combat.combo_step, 0.25);
        assert_eq!(config.combat.damage.crit_chance, 0.1);
        assert_eq!(config.combat.damage.crit_multiplier, 1.5);
        assert_eq!(config.combat.hit_chance.max, 0.95);
    }

    #[test]
    fn invalid_tables_are_rejected() {
        let err = ConfigLoader::parse(
            r#"
            [combat.hit_chance]
            min = 0.9
            max = 0.1
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("hit_chance"));
    }

    #[test]
    fn loosened_combat_floors_are_rejected() {
        let cases = [
            ("[combat.hit_chance]\nmin = 0.0\n", "hit_chance.min"),
            ("[combat.hit_chance]\nmax = 1.0\n", "hit_chance.max"),
            ("[combat.damage]\nminimum = 0.01\n", "damage.minimum"),
        ];

        for (toml, field) in cases {
            let err = ConfigLoader::parse(toml).unwrap_err();
            assert!(err.to_string().contains(field), "{toml}: {err}");
        }
    }

    #[test]
    fn stricter_combat_floors_load() {
        let config = ConfigLoader::parse(
            r#"
            [combat.hit_chance]
            min = 0.2
            max = 0.9

            [combat.damage]
            minimum = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(config.combat.hit_chance.min, 0.2);
        assert_eq!(config.combat.damage.minimum, 2.0);
    }

    #[test]
    fn negative_regen_is_rejected() {
        assert!(ConfigLoader::parse("mana_regen_rate = -1.0").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/skirmish.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/skirmish.toml"));
    }
}
