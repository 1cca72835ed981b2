use skirmish_core::{EnemyError, EntityId, ErrorSeverity, GameError};

/// Errors surfaced by [`crate::Encounter`].
///
/// Tick processing itself never fails; these cover addressing enemies that
/// do not exist (or no longer fight) and spawning from bad profiles.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncounterError {
    #[error("enemy {0} is not part of this encounter")]
    UnknownEnemy(EntityId),

    #[error("enemy {0} is already part of this encounter")]
    DuplicateEnemy(EntityId),

    #[error("enemy {0} is already dead")]
    TargetDead(EntityId),

    #[error("invalid enemy profile: {0}")]
    InvalidProfile(#[from] EnemyError),
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidProfile(inner) => inner.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEnemy(_) => "ENCOUNTER_UNKNOWN_ENEMY",
            Self::DuplicateEnemy(_) => "ENCOUNTER_DUPLICATE_ENEMY",
            Self::TargetDead(_) => "ENCOUNTER_TARGET_DEAD",
            Self::InvalidProfile(_) => "ENCOUNTER_INVALID_PROFILE",
        }
    }
}

pub type Result<T> = std::result::Result<T, EncounterError>;
