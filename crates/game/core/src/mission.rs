//! Mission progress and reward calculation.
//!
//! The mission itself is host bookkeeping; this module only turns its
//! counters into a completion flag, a percentage and a reward.

/// Progress counters of one elimination mission.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionProgress {
    pub id: u32,
    pub name: String,
    pub target_count: u32,
    pub targets_eliminated: u32,
    /// Total seconds allowed.
    pub time_limit: f32,
}

/// Values the host displays or pays out at the end of a mission.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionSummary {
    pub complete: bool,
    pub completion_percentage: f32,
    pub reward: i32,
}

impl MissionProgress {
    pub const BASE_REWARD: f32 = 1000.0;
    pub const COMPLETION_BONUS_PER_PERCENT: f32 = 10.0;
    pub const MAX_TIME_BONUS: f32 = 500.0;

    pub fn new(id: u32, name: impl Into<String>, target_count: u32, time_limit: f32) -> Self {
        Self {
            id,
            name: name.into(),
            target_count,
            targets_eliminated: 0,
            time_limit,
        }
    }

    pub fn record_elimination(&mut self) {
        self.targets_eliminated = self.targets_eliminated.saturating_add(1);
    }

    pub fn is_complete(&self) -> bool {
        self.targets_eliminated >= self.target_count
    }

    /// `eliminated / target * 100`, or 0 when the mission has no targets.
    ///
    /// Not capped: overkill reports above 100.
    pub fn completion_percentage(&self) -> f32 {
        if self.target_count == 0 {
            return 0.0;
        }
        self.targets_eliminated as f32 / self.target_count as f32 * 100.0
    }

    /// `1000 + 10 * percentage + 500 * (time_remaining / time_limit)`,
    /// truncated toward zero and saturated into `i32`.
    ///
    /// A non-positive time limit contributes no time bonus.
    pub fn reward(&self, time_remaining: f32) -> i32 {
        let completion_bonus = self.completion_percentage() * Self::COMPLETION_BONUS_PER_PERCENT;
        let time_bonus = if self.time_limit > 0.0 {
            time_remaining / self.time_limit * Self::MAX_TIME_BONUS
        } else {
            0.0
        };

        (Self::BASE_REWARD + completion_bonus + time_bonus) as i32
    }

    pub fn summary(&self, time_remaining: f32) -> MissionSummary {
        MissionSummary {
            complete: self.is_complete(),
            completion_percentage: self.completion_percentage(),
            reward: self.reward(time_remaining),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep() -> MissionProgress {
        MissionProgress::new(7, "Clear the Yard", 10, 120.0)
    }

    #[test]
    fn all_targets_down_completes() {
        let mut mission = sweep();
        for _ in 0..10 {
            mission.record_elimination();
        }
        assert!(mission.is_complete());
        assert_eq!(mission.completion_percentage(), 100.0);
    }

    #[test]
    fn partial_progress_is_incomplete() {
        let mut mission = sweep();
        for _ in 0..4 {
            mission.record_elimination();
        }
        assert!(!mission.is_complete());
        assert_eq!(mission.completion_percentage(), 40.0);
    }

    #[test]
    fn zero_targets_reports_zero_percent() {
        let mission = MissionProgress::new(1, "Empty", 0, 60.0);
        assert_eq!(mission.completion_percentage(), 0.0);
        assert!(mission.is_complete());
        assert_eq!(mission.reward(0.0), 1000);
    }

    #[test]
    fn reward_adds_completion_and_time_bonus() {
        let mission = MissionProgress {
            targets_eliminated: 10,
            ..sweep()
        };
        // 1000 + 100 * 10 + 500 * (60 / 120)
        assert_eq!(mission.reward(60.0), 2250);
    }

    #[test]
    fn reward_truncates_toward_zero() {
        let mission = MissionProgress {
            targets_eliminated: 1,
            ..MissionProgress::new(2, "Odd", 3, 120.0)
        };
        // 1000 + 333.33 + 0
        assert_eq!(mission.reward(0.0), 1333);
    }

    #[test]
    fn zero_time_limit_has_no_time_bonus() {
        let mission = MissionProgress {
            targets_eliminated: 5,
            ..MissionProgress::new(3, "Untimed", 5, 0.0)
        };
        assert_eq!(mission.reward(30.0), 2000);
    }

    #[test]
    fn summary_bundles_all_outputs() {
        let mission = MissionProgress {
            targets_eliminated: 5,
            ..sweep()
        };
        let summary = mission.summary(0.0);
        assert!(!summary.complete);
        assert_eq!(summary.completion_percentage, 50.0);
        assert_eq!(summary.reward, 1500);
    }
}
