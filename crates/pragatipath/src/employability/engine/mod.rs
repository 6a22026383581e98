mod band;
mod signals;
mod weights;

pub use band::ScoreBand;
pub use signals::SignalCounts;
pub use weights::{ScoringWeights, SignalWeight};

use super::domain::StudentId;
use serde::{Deserialize, Serialize};
use signals::score_signals;

/// Stateless scorer applying the rubric weights to gathered signal counts.
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, student_id: &StudentId, counts: &SignalCounts) -> ScoreReport {
        let (components, total_score) = score_signals(counts, &self.weights);

        ScoreReport {
            student_id: student_id.clone(),
            total_score,
            components,
        }
    }
}

/// The signal categories feeding the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    ProfileCompletion,
    Skills,
    Education,
    Experience,
    Certificates,
    Applications,
    CompletedInterviews,
}

impl SignalKind {
    pub const fn label(self) -> &'static str {
        match self {
            SignalKind::ProfileCompletion => "profile completion",
            SignalKind::Skills => "skills",
            SignalKind::Education => "education entries",
            SignalKind::Experience => "experience entries",
            SignalKind::Certificates => "certificates",
            SignalKind::Applications => "applications",
            SignalKind::CompletedInterviews => "completed interviews",
        }
    }
}

/// Discrete contribution of one signal, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub signal: SignalKind,
    pub count: u32,
    pub points: u32,
    pub note: String,
}

/// Scoring output: the composite total plus the per-signal breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub student_id: StudentId,
    pub total_score: u32,
    pub components: Vec<ScoreComponent>,
}

impl ScoreReport {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.total_score)
    }

    pub fn view(&self) -> ScoreBreakdownView {
        ScoreBreakdownView {
            student_id: self.student_id.clone(),
            score: self.total_score,
            band: self.band().label(),
            components: self.components.clone(),
        }
    }
}

/// Representation served by the preview endpoint and display surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdownView {
    pub student_id: StudentId,
    pub score: u32,
    pub band: &'static str,
    pub components: Vec<ScoreComponent>,
}
