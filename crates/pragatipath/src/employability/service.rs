use std::sync::Arc;

use tracing::debug;

use super::domain::{ApplicationId, StudentId};
use super::engine::{ScoreReport, ScoringEngine, ScoringWeights, SignalCounts};
use super::repository::{
    ApplicationRepository, CertificateRepository, InterviewRepository, RepositoryError,
    StudentRepository,
};

/// Service composing the four repository seams with the scoring engine.
///
/// Each invocation gathers one student's signals, scores them, and (unless
/// previewing) overwrites the persisted score. Recomputation cadence is the
/// caller's concern; the service neither schedules nor retries.
pub struct EmployabilityScoreService<S, C, A, I> {
    students: Arc<S>,
    certificates: Arc<C>,
    applications: Arc<A>,
    interviews: Arc<I>,
    engine: Arc<ScoringEngine>,
}

impl<S, C, A, I> EmployabilityScoreService<S, C, A, I>
where
    S: StudentRepository + 'static,
    C: CertificateRepository + 'static,
    A: ApplicationRepository + 'static,
    I: InterviewRepository + 'static,
{
    pub fn new(
        students: Arc<S>,
        certificates: Arc<C>,
        applications: Arc<A>,
        interviews: Arc<I>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            students,
            certificates,
            applications,
            interviews,
            engine: Arc::new(ScoringEngine::new(weights)),
        }
    }

    /// Compute the student's score and persist it onto the student record.
    ///
    /// A persist failure fails the whole operation; the computed score is
    /// discarded rather than reported as a partial success.
    pub fn compute_and_store(&self, id: &StudentId) -> Result<ScoreReport, ScoreServiceError> {
        let report = self.assemble_report(id)?;
        self.students.update_score(id, report.total_score)?;
        debug!(student = %id.0, score = report.total_score, "employability score persisted");
        Ok(report)
    }

    /// Compute the student's score without touching persistent storage.
    pub fn preview(&self, id: &StudentId) -> Result<ScoreReport, ScoreServiceError> {
        self.assemble_report(id)
    }

    fn assemble_report(&self, id: &StudentId) -> Result<ScoreReport, ScoreServiceError> {
        let student = self
            .students
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let applications = self.applications.for_student(id)?;
        let application_ids: Vec<ApplicationId> = applications
            .iter()
            .map(|application| application.id.clone())
            .collect();

        // No applications means no interviews can be attributed; skip the lookup.
        let completed_interviews = if application_ids.is_empty() {
            0
        } else {
            self.interviews.count_completed(&application_ids)?
        };

        let counts = SignalCounts {
            profile_completed: student.profile_completed,
            skills: student.skills.len() as u32,
            education_entries: student.education.len() as u32,
            experience_entries: student.experience.len() as u32,
            certificates: self.certificates.count_for_student(id)?,
            applications: application_ids.len() as u32,
            completed_interviews,
        };

        Ok(self.engine.score(id, &counts))
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoreServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
