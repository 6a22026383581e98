use serde::{Deserialize, Serialize};

/// Coarse readiness bands the portal dashboards display next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Strong,
    Developing,
    Emerging,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            75.. => Self::Excellent,
            50..=74 => Self::Strong,
            25..=49 => Self::Developing,
            _ => Self::Emerging,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Strong => "strong",
            ScoreBand::Developing => "developing",
            ScoreBand::Emerging => "emerging",
        }
    }
}
