//! Skill book loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{AbilityState, GameConfig, SkillSpec};

use crate::loaders::{LoadResult, read_file};

/// Skill book structure for RON files.
///
/// ```ron
/// (
///     max_mana: Some(120.0),
///     skills: [
///         (id: 1, cooldown: 5.0, mana_cost: 20.0, damage: 40.0),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillBook {
    /// Overrides [`GameConfig::max_mana`] when set.
    #[serde(default)]
    pub max_mana: Option<f32>,
    pub skills: Vec<SkillSpec>,
}

/// Loader for player skill books from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load a skill book and register it into a fresh, full-mana ledger.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<AbilityState> {
        let content = read_file(path)?;
        Self::parse(&content, config)
            .map_err(|e| anyhow::anyhow!("Invalid skill book {}: {}", path.display(), e))
    }

    pub fn parse(content: &str, config: &GameConfig) -> LoadResult<AbilityState> {
        let book: SkillBook = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill book RON: {}", e))?;

        let mut state = AbilityState::new(book.max_mana.unwrap_or(config.max_mana))?;
        for spec in book.skills {
            state.register(spec)?;
        }

        tracing::debug!(skills = state.len(), max_mana = state.max_mana(), "loaded skill book");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::SkillId;

    const BOOK: &str = r#"
        (
            skills: [
                (id: 1, cooldown: 5.0, mana_cost: 20.0, damage: 40.0),
                (id: 2, cooldown: 12.0, mana_cost: 60.0, damage: 110.0),
            ],
        )
    "#;

    #[test]
    fn registers_every_skill() {
        let state = SkillLoader::parse(BOOK, &GameConfig::default()).unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.max_mana(), 100.0);
        assert_eq!(state.skill(SkillId(2)).unwrap().damage(), 110.0);
        assert!(state.can_use(SkillId(1)));
    }

    #[test]
    fn book_mana_overrides_config() {
        let book = r#"(max_mana: Some(40.0), skills: [])"#;
        let state = SkillLoader::parse(book, &GameConfig::default()).unwrap();
        assert_eq!(state.max_mana(), 40.0);
        assert_eq!(state.current_mana(), 40.0);
    }

    #[test]
    fn duplicate_ids_fail_the_load() {
        let book = r#"
            (skills: [
                (id: 1, cooldown: 1.0, mana_cost: 1.0, damage: 1.0),
                (id: 1, cooldown: 2.0, mana_cost: 2.0, damage: 2.0),
            ])
        "#;
        let err = SkillLoader::parse(book, &GameConfig::default()).unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn negative_cost_fails_the_load() {
        let book = r#"(skills: [(id: 4, cooldown: 1.0, mana_cost: -3.0, damage: 1.0)])"#;
        assert!(SkillLoader::parse(book, &GameConfig::default()).is_err());
    }
}
