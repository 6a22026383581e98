use metrics_exporter_prometheus::PrometheusHandle;
use pragatipath::employability::{
    ApplicationId, ApplicationRepository, Certificate, CertificateRepository, Interview,
    InterviewRepository, InterviewStatus, JobApplication, RepositoryError, StudentId,
    StudentRecord, StudentRepository,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryStudentRepository {
    records: Arc<Mutex<HashMap<StudentId, StudentRecord>>>,
}

impl InMemoryStudentRepository {
    pub(crate) fn insert(&self, record: StudentRecord) {
        self.records
            .lock()
            .expect("student mutex poisoned")
            .insert(record.id.clone(), record);
    }

    pub(crate) fn get(&self, id: &StudentId) -> Option<StudentRecord> {
        self.records
            .lock()
            .expect("student mutex poisoned")
            .get(id)
            .cloned()
    }
}

impl StudentRepository for InMemoryStudentRepository {
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
pub(crate) struct InMemoryCertificateRepository {
    records: Arc<Mutex<Vec<Certificate>>>,
}

impl InMemoryCertificateRepository {
    pub(crate) fn insert(&self, record: Certificate) {
        self.records
            .lock()
            .expect("certificate mutex poisoned")
            .push(record);
    }
}

impl CertificateRepository for InMemoryCertificateRepository {
    fn count_for_student(&self, id: &StudentId) -> Result<u32, RepositoryError> {
        let guard = self.records.lock().expect("certificate mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.student_id == id)
            .count() as u32)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<JobApplication>>>,
}

impl InMemoryApplicationRepository {
    pub(crate) fn insert(&self, record: JobApplication) {
        self.records
            .lock()
            .expect("application mutex poisoned")
            .push(record);
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
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
pub(crate) struct InMemoryInterviewRepository {
    records: Arc<Mutex<Vec<Interview>>>,
}

impl InMemoryInterviewRepository {
    pub(crate) fn insert(&self, record: Interview) {
        self.records
            .lock()
            .expect("interview mutex poisoned")
            .push(record);
    }
}

impl InterviewRepository for InMemoryInterviewRepository {
    fn count_completed(&self, applications: &[ApplicationId]) -> Result<u32, RepositoryError> {
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

/// Bundle of the four in-memory stores backing one service instance.
///
/// Stands in for the hosted Postgres until a database adapter lands; each
/// store is shared so routes and seeding see the same records.
#[derive(Default, Clone)]
pub(crate) struct InMemoryStores {
    pub(crate) students: Arc<InMemoryStudentRepository>,
    pub(crate) certificates: Arc<InMemoryCertificateRepository>,
    pub(crate) applications: Arc<InMemoryApplicationRepository>,
    pub(crate) interviews: Arc<InMemoryInterviewRepository>,
}

impl InMemoryStores {
    pub(crate) fn load(&self, data: SeedData) {
        for student in data.students {
            self.students.insert(student);
        }
        for certificate in data.certificates {
            self.certificates.insert(certificate);
        }
        for application in data.applications {
            self.applications.insert(application);
        }
        for interview in data.interviews {
            self.interviews.insert(interview);
        }
    }
}

/// Serialized dataset for local runs and demos.
#[derive(Debug, Deserialize)]
pub(crate) struct SeedData {
    #[serde(default)]
    pub(crate) students: Vec<StudentRecord>,
    #[serde(default)]
    pub(crate) certificates: Vec<Certificate>,
    #[serde(default)]
    pub(crate) applications: Vec<JobApplication>,
    #[serde(default)]
    pub(crate) interviews: Vec<Interview>,
}
