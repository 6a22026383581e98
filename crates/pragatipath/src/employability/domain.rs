use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for student records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

/// Identifier wrapper for job applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// One education entry on a student profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub qualification: String,
    #[serde(default)]
    pub completed_in: Option<u16>,
}

/// One work or internship entry on a student profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub organization: String,
    pub role: String,
    #[serde(default)]
    pub months: Option<u16>,
}

/// Student profile as persisted by the portal.
///
/// Profiles saved before a list column existed store `null` rather than an
/// empty array; those deserialize as empty here, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub full_name: String,
    #[serde(default)]
    pub profile_completed: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<ExperienceEntry>,
    /// Last persisted composite score, overwritten on every recomputation.
    #[serde(default)]
    pub employability_score: Option<u32>,
}

/// Certificate issued to a student. Only its existence feeds the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub student_id: StudentId,
    pub certificate_type: CertificateType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub issued_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateType {
    Course,
    Internship,
    Placement,
    Participation,
}

/// Application a student filed against a posted opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub student_id: StudentId,
    pub opportunity_id: String,
    pub status: ApplicationStatus,
    pub applied_on: NaiveDate,
}

/// Application lifecycle status mirrored from the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    UnderReview,
    InterviewScheduled,
    Accepted,
    Rejected,
}

/// Interview attached to one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub application_id: ApplicationId,
    pub status: InterviewStatus,
    pub scheduled_for: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
