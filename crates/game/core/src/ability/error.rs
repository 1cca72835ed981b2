//! Skill registration errors.

use crate::error::{ErrorSeverity, GameError};
use crate::types::SkillId;

/// Errors raised while building a skill ledger.
///
/// Using, ticking and regenerating never fail; only setup does.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AbilityError {
    /// A skill with this id is already registered.
    #[error("skill {0} is already registered")]
    DuplicateSkill(SkillId),

    /// A skill parameter is negative or not finite.
    #[error("skill {id} has invalid {field}: {value}")]
    InvalidSkill {
        id: SkillId,
        field: &'static str,
        value: f32,
    },

    /// Mana pool maximum is negative or not finite.
    #[error("invalid mana pool maximum: {0}")]
    InvalidManaPool(f32),
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateSkill(_) => "ABILITY_DUPLICATE_SKILL",
            Self::InvalidSkill { .. } => "ABILITY_INVALID_SKILL",
            Self::InvalidManaPool(_) => "ABILITY_INVALID_MANA_POOL",
        }
    }
}
