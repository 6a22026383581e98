//! Employability score computation for the placement portal.
//!
//! A student's score is a derived 0-100 integer summarizing profile
//! completeness, skills, education and experience history, certificates,
//! applications, and completed interviews. Each signal is weighted and
//! capped independently before the capped grand total. The engine reads
//! through explicit repository traits so it can be exercised without the
//! hosted database, and persists the result back onto the student record.

pub mod domain;
pub mod engine;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, ApplicationStatus, Certificate, CertificateType, EducationEntry,
    ExperienceEntry, Interview, InterviewStatus, JobApplication, StudentId, StudentRecord,
};
pub use engine::{
    ScoreBand, ScoreBreakdownView, ScoreComponent, ScoreReport, ScoringEngine, ScoringWeights,
    SignalCounts, SignalKind, SignalWeight,
};
pub use repository::{
    ApplicationRepository, CertificateRepository, InterviewRepository, RepositoryError,
    StudentRepository,
};
pub use router::employability_router;
pub use service::{EmployabilityScoreService, ScoreServiceError};
