//! Enemy construction errors.

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EnemyError {
    /// Max health must be positive and finite; the health fraction divides by it.
    #[error("invalid max health: {0}")]
    InvalidMaxHealth(f32),

    /// Ranges and thresholds must be non-negative and finite.
    #[error("invalid {field}: {value}")]
    InvalidParameter { field: &'static str, value: f32 },

    /// Integer code outside the behavior state enumeration.
    #[error("unknown behavior state code {0}")]
    UnknownStateCode(u8),
}

impl GameError for EnemyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidMaxHealth(_) | Self::InvalidParameter { .. } => ErrorSeverity::Validation,
            Self::UnknownStateCode(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMaxHealth(_) => "ENEMY_INVALID_MAX_HEALTH",
            Self::InvalidParameter { .. } => "ENEMY_INVALID_PARAMETER",
            Self::UnknownStateCode(_) => "ENEMY_UNKNOWN_STATE_CODE",
        }
    }
}
