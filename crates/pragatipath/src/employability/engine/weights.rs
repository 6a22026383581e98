use serde::{Deserialize, Serialize};

/// Linear award for one counted signal: points per unit, capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalWeight {
    pub points_per_unit: u32,
    pub cap: u32,
}

impl SignalWeight {
    pub const fn new(points_per_unit: u32, cap: u32) -> Self {
        Self {
            points_per_unit,
            cap,
        }
    }

    /// Points awarded for `count` units, never above the cap.
    pub fn award(&self, count: u32) -> u32 {
        self.points_per_unit.saturating_mul(count).min(self.cap)
    }
}

/// Rubric weights for the employability score.
///
/// The defaults mirror the portal rubric: the per-signal caps sum to exactly
/// the total cap of 100, so the final clamp only binds once a weight is
/// retuned independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub completed_profile_points: u32,
    pub skills: SignalWeight,
    pub education: SignalWeight,
    pub experience: SignalWeight,
    pub certificates: SignalWeight,
    pub applications: SignalWeight,
    pub completed_interviews: SignalWeight,
    pub total_cap: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            completed_profile_points: 20,
            skills: SignalWeight::new(2, 20),
            education: SignalWeight::new(5, 15),
            experience: SignalWeight::new(7, 15),
            certificates: SignalWeight::new(5, 10),
            applications: SignalWeight::new(2, 10),
            completed_interviews: SignalWeight::new(5, 10),
            total_cap: 100,
        }
    }
}
