use super::EnemyError;

/// High-level action mode of an enemy for the current tick.
///
/// The discriminants are the integer codes used in
/// [`EnemyUpdate`](crate::packet::EnemyUpdate).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BehaviorState {
    #[default]
    Idle = 0,
    Patrol = 1,
    Chase = 2,
    Attack = 3,
    /// Low-health retreat; overrides every proximity signal.
    Stunned = 4,
    /// Terminal. The host decides when to despawn or respawn.
    Dead = 5,
}

impl BehaviorState {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_dead(self) -> bool {
        matches!(self, BehaviorState::Dead)
    }

    /// True for states in which the enemy is engaging its target.
    pub const fn is_hostile(self) -> bool {
        matches!(self, BehaviorState::Chase | BehaviorState::Attack)
    }
}

impl TryFrom<u8> for BehaviorState {
    type Error = EnemyError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Idle),
            1 => Ok(Self::Patrol),
            2 => Ok(Self::Chase),
            3 => Ok(Self::Attack),
            4 => Ok(Self::Stunned),
            5 => Ok(Self::Dead),
            other => Err(EnemyError::UnknownStateCode(other)),
        }
    }
}
