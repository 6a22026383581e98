use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::employability::domain::{
    ApplicationId, ApplicationStatus, Certificate, CertificateType, EducationEntry,
    ExperienceEntry, Interview, InterviewStatus, JobApplication, StudentId, StudentRecord,
};
use crate::employability::engine::{ScoringEngine, ScoringWeights};
use crate::employability::repository::{
    ApplicationRepository, CertificateRepository, InterviewRepository, RepositoryError,
    StudentRepository,
};
use crate::employability::service::EmployabilityScoreService;

pub(super) fn weights() -> ScoringWeights {
    ScoringWeights::default()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(weights())
}

pub(super) fn blank_student(id: &str) -> StudentRecord {
    StudentRecord {
        id: StudentId(id.to_string()),
        full_name: "Asha Verma".to_string(),
        profile_completed: false,
        skills: Vec::new(),
        education: Vec::new(),
        experience: Vec::new(),
        employability_score: None,
    }
}

pub(super) fn rich_student(id: &str) -> StudentRecord {
    StudentRecord {
        id: StudentId(id.to_string()),
        full_name: "Asha Verma".to_string(),
        profile_completed: true,
        skills: vec![
            "Rust".to_string(),
            "SQL".to_string(),
            "Communication".to_string(),
        ],
        education: vec![EducationEntry {
            institution: "Govt Polytechnic Nagpur".to_string(),
            qualification: "Diploma in Computer Engineering".to_string(),
            completed_in: Some(2024),
        }],
        experience: vec![ExperienceEntry {
            organization: "District e-Seva Kendra".to_string(),
            role: "Intern".to_string(),
            months: Some(6),
        }],
        employability_score: None,
    }
}

pub(super) fn certificate(student: &str, title: &str) -> Certificate {
    Certificate {
        student_id: StudentId(student.to_string()),
        certificate_type: CertificateType::Course,
        title: title.to_string(),
        description: "Completed with distinction".to_string(),
        issued_on: NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date"),
    }
}

pub(super) fn application(id: &str, student: &str, status: ApplicationStatus) -> JobApplication {
    JobApplication {
        id: ApplicationId(id.to_string()),
        student_id: StudentId(student.to_string()),
        opportunity_id: "opp-frontend-01".to_string(),
        status,
        applied_on: NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date"),
    }
}

pub(super) fn interview(application: &str, status: InterviewStatus) -> Interview {
    Interview {
        application_id: ApplicationId(application.to_string()),
        status,
        scheduled_for: NaiveDate::from_ymd_opt(2025, 7, 20).expect("valid date"),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStudents {
    records: Arc<Mutex<HashMap<StudentId, StudentRecord>>>,
}

impl MemoryStudents {
    pub(super) fn insert(&self, record: StudentRecord) {
        self.records
            .lock()
            .expect("student mutex poisoned")
            .insert(record.id.clone(), record);
    }

    pub(super) fn stored_score(&self, id: &StudentId) -> Option<u32> {
        self.records
            .lock()
            .expect("student mutex poisoned")
            .get(id)
            .and_then(|record| record.employability_score)
    }
}

impl StudentRepository for MemoryStudents {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("student mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn update_score(&self, id: &StudentId, score: u32) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("student mutex poisoned");
        match guard.get_mut(id) {
            Some(record) => {
                record.employability_score = Some(score);
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryCertificates {
    records: Arc<Mutex<Vec<Certificate>>>,
}

impl MemoryCertificates {
    pub(super) fn insert(&self, record: Certificate) {
        self.records
            .lock()
            .expect("certificate mutex poisoned")
            .push(record);
    }
}

impl CertificateRepository for MemoryCertificates {
    fn count_for_student(&self, id: &StudentId) -> Result<u32, RepositoryError> {
        let guard = self.records.lock().expect("certificate mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.student_id == id)
            .count() as u32)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryApplications {
    records: Arc<Mutex<Vec<JobApplication>>>,
}

impl MemoryApplications {
    pub(super) fn insert(&self, record: JobApplication) {
        self.records
            .lock()
            .expect("application mutex poisoned")
            .push(record);
    }
}

impl ApplicationRepository for MemoryApplications {
    fn for_student(&self, id: &StudentId) -> Result<Vec<JobApplication>, RepositoryError> {
        let guard = self.records.lock().expect("application mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.student_id == id)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryInterviews {
    records: Arc<Mutex<Vec<Interview>>>,
    lookups: Arc<Mutex<u32>>,
}

impl MemoryInterviews {
    pub(super) fn insert(&self, record: Interview) {
        self.records
            .lock()
            .expect("interview mutex poisoned")
            .push(record);
    }

    pub(super) fn lookups(&self) -> u32 {
        *self.lookups.lock().expect("interview mutex poisoned")
    }
}

impl InterviewRepository for MemoryInterviews {
    fn count_completed(&self, applications: &[ApplicationId]) -> Result<u32, RepositoryError> {
        *self.lookups.lock().expect("interview mutex poisoned") += 1;
        let guard = self.records.lock().expect("interview mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| {
                record.status == InterviewStatus::Completed
                    && applications.contains(&record.application_id)
            })
            .count() as u32)
    }
}

/// Student store that reads fine but refuses the score write.
pub(super) struct ReadOnlyStudents {
    pub(super) inner: MemoryStudents,
}

impl StudentRepository for ReadOnlyStudents {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn update_score(&self, _id: &StudentId, _score: u32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }
}

/// Student store standing in for an offline database.
pub(super) struct UnavailableStudents;

impl StudentRepository for UnavailableStudents {
    fn fetch(&self, _id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_score(&self, _id: &StudentId, _score: u32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) type MemoryService =
    EmployabilityScoreService<MemoryStudents, MemoryCertificates, MemoryApplications, MemoryInterviews>;

pub(super) struct Stores {
    pub(super) students: Arc<MemoryStudents>,
    pub(super) certificates: Arc<MemoryCertificates>,
    pub(super) applications: Arc<MemoryApplications>,
    pub(super) interviews: Arc<MemoryInterviews>,
}

pub(super) fn build_service() -> (MemoryService, Stores) {
    let stores = Stores {
        students: Arc::new(MemoryStudents::default()),
        certificates: Arc::new(MemoryCertificates::default()),
        applications: Arc::new(MemoryApplications::default()),
        interviews: Arc::new(MemoryInterviews::default()),
    };
    let service = EmployabilityScoreService::new(
        stores.students.clone(),
        stores.certificates.clone(),
        stores.applications.clone(),
        stores.interviews.clone(),
        weights(),
    );
    (service, stores)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
