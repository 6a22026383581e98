use super::weights::ScoringWeights;
use super::{ScoreComponent, SignalKind};

/// Raw counts gathered from the four stores before scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignalCounts {
    pub profile_completed: bool,
    pub skills: u32,
    pub education_entries: u32,
    pub experience_entries: u32,
    pub certificates: u32,
    pub applications: u32,
    pub completed_interviews: u32,
}

pub(crate) fn score_signals(
    counts: &SignalCounts,
    weights: &ScoringWeights,
) -> (Vec<ScoreComponent>, u32) {
    let mut components = Vec::with_capacity(7);
    let mut total: u32 = 0;

    let profile_points = if counts.profile_completed {
        weights.completed_profile_points
    } else {
        0
    };
    components.push(ScoreComponent {
        signal: SignalKind::ProfileCompletion,
        count: u32::from(counts.profile_completed),
        points: profile_points,
        note: if counts.profile_completed {
            "profile completed".to_string()
        } else {
            "profile incomplete".to_string()
        },
    });
    total += profile_points;

    let counted = [
        (SignalKind::Skills, counts.skills, weights.skills),
        (
            SignalKind::Education,
            counts.education_entries,
            weights.education,
        ),
        (
            SignalKind::Experience,
            counts.experience_entries,
            weights.experience,
        ),
        (
            SignalKind::Certificates,
            counts.certificates,
            weights.certificates,
        ),
        (
            SignalKind::Applications,
            counts.applications,
            weights.applications,
        ),
        (
            SignalKind::CompletedInterviews,
            counts.completed_interviews,
            weights.completed_interviews,
        ),
    ];

    for (signal, count, weight) in counted {
        let points = weight.award(count);
        let note = if points == weight.cap {
            format!("{} x{count}, capped at {points}", signal.label())
        } else {
            format!("{} x{count} worth {points}", signal.label())
        };
        components.push(ScoreComponent {
            signal,
            count,
            points,
            note,
        });
        total += points;
    }

    // Per-signal caps sum to the total cap today; the clamp must survive
    // independent retuning of any single weight.
    (components, total.min(weights.total_cap))
}
