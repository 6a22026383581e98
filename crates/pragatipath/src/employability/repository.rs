use super::domain::{ApplicationId, JobApplication, StudentId, StudentRecord};

/// Storage seam for student profiles so the scoring service can be exercised
/// without a live database. The score write overwrites the stored value.
pub trait StudentRepository: Send + Sync {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError>;
    fn update_score(&self, id: &StudentId, score: u32) -> Result<(), RepositoryError>;
}

/// Certificate store; the engine only ever needs the cardinality.
pub trait CertificateRepository: Send + Sync {
    fn count_for_student(&self, id: &StudentId) -> Result<u32, RepositoryError>;
}

/// Application store; ids are needed to attribute interviews.
pub trait ApplicationRepository: Send + Sync {
    fn for_student(&self, id: &StudentId) -> Result<Vec<JobApplication>, RepositoryError>;
}

/// Interview store, restricted to the given applications so one student's
/// interviews never leak into another student's score.
pub trait InterviewRepository: Send + Sync {
    fn count_completed(&self, applications: &[ApplicationId]) -> Result<u32, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("student record not found")]
    NotFound,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
