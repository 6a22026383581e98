use crate::infra::{InMemoryStores, SeedData};
use chrono::NaiveDate;
use clap::Args;
use pragatipath::employability::{
    ApplicationId, ApplicationStatus, Certificate, CertificateType, EducationEntry,
    EmployabilityScoreService, ExperienceEntry, Interview, InterviewStatus, JobApplication,
    ScoreReport, ScoringWeights, StudentId, StudentRecord,
};
use pragatipath::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreDemoArgs {
    /// JSON dataset with students, certificates, applications, and interviews
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Score only the given student instead of the whole cohort
    #[arg(long)]
    pub(crate) student_id: Option<String>,
}

pub(crate) fn run_score_demo(args: ScoreDemoArgs) -> Result<(), AppError> {
    let data = match args.dataset {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => sample_cohort(),
    };

    let mut student_ids: Vec<StudentId> =
        data.students.iter().map(|student| student.id.clone()).collect();
    if let Some(only) = args.student_id {
        student_ids.retain(|id| id.0 == only);
    }

    let stores = InMemoryStores::default();
    stores.load(data);

    let service = EmployabilityScoreService::new(
        stores.students.clone(),
        stores.certificates.clone(),
        stores.applications.clone(),
        stores.interviews.clone(),
        ScoringWeights::default(),
    );

    for id in &student_ids {
        match service.compute_and_store(id) {
            Ok(report) => print_report(&report),
            Err(err) => println!("{}: {err}", id.0),
        }
    }

    Ok(())
}

fn print_report(report: &ScoreReport) {
    println!(
        "{} scored {}/100 ({})",
        report.student_id.0,
        report.total_score,
        report.band().label()
    );
    for component in &report.components {
        println!("  {:>3}  {}", component.points, component.note);
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

/// A small cohort spanning the score bands for stakeholder walkthroughs.
pub(crate) fn sample_cohort() -> SeedData {
    let students = vec![
        StudentRecord {
            id: StudentId("stu-anita".to_string()),
            full_name: "Anita Deshmukh".to_string(),
            profile_completed: true,
            skills: vec![
                "Rust".to_string(),
                "PostgreSQL".to_string(),
                "Tally".to_string(),
                "Spoken English".to_string(),
                "Typing".to_string(),
            ],
            education: vec![
                EducationEntry {
                    institution: "ITI Nashik".to_string(),
                    qualification: "Certificate in COPA".to_string(),
                    completed_in: Some(2023),
                },
                EducationEntry {
                    institution: "Govt Polytechnic Nashik".to_string(),
                    qualification: "Diploma in IT".to_string(),
                    completed_in: Some(2025),
                },
            ],
            experience: vec![ExperienceEntry {
                organization: "Taluka Office".to_string(),
                role: "Data Entry Operator".to_string(),
                months: Some(10),
            }],
            employability_score: None,
        },
        StudentRecord {
            id: StudentId("stu-rahul".to_string()),
            full_name: "Rahul Pawar".to_string(),
            profile_completed: true,
            skills: vec!["MS Office".to_string(), "Hindi Typing".to_string()],
            education: vec![EducationEntry {
                institution: "ITI Aurangabad".to_string(),
                qualification: "Certificate in Electrician Trade".to_string(),
                completed_in: Some(2024),
            }],
            experience: Vec::new(),
            employability_score: None,
        },
        StudentRecord {
            id: StudentId("stu-kavya".to_string()),
            full_name: "Kavya Nair".to_string(),
            profile_completed: false,
            skills: Vec::new(),
            education: Vec::new(),
            experience: Vec::new(),
            employability_score: None,
        },
    ];

    let certificates = vec![
        Certificate {
            student_id: StudentId("stu-anita".to_string()),
            certificate_type: CertificateType::Course,
            title: "Advanced Excel".to_string(),
            description: "District skilling drive, top decile".to_string(),
            issued_on: date(2025, 2, 14),
        },
        Certificate {
            student_id: StudentId("stu-anita".to_string()),
            certificate_type: CertificateType::Internship,
            title: "Summer Internship Completion".to_string(),
            description: String::new(),
            issued_on: date(2025, 6, 30),
        },
        Certificate {
            student_id: StudentId("stu-rahul".to_string()),
            certificate_type: CertificateType::Participation,
            title: "Placement Drive Participation".to_string(),
            description: String::new(),
            issued_on: date(2025, 4, 2),
        },
    ];

    let applications = vec![
        JobApplication {
            id: ApplicationId("app-anita-1".to_string()),
            student_id: StudentId("stu-anita".to_string()),
            opportunity_id: "opp-junior-accountant".to_string(),
            status: ApplicationStatus::InterviewScheduled,
            applied_on: date(2025, 7, 1),
        },
        JobApplication {
            id: ApplicationId("app-anita-2".to_string()),
            student_id: StudentId("stu-anita".to_string()),
            opportunity_id: "opp-office-assistant".to_string(),
            status: ApplicationStatus::UnderReview,
            applied_on: date(2025, 7, 8),
        },
        JobApplication {
            id: ApplicationId("app-rahul-1".to_string()),
            student_id: StudentId("stu-rahul".to_string()),
            opportunity_id: "opp-maintenance-tech".to_string(),
            status: ApplicationStatus::Applied,
            applied_on: date(2025, 7, 12),
        },
    ];

    let interviews = vec![
        Interview {
            application_id: ApplicationId("app-anita-1".to_string()),
            status: InterviewStatus::Completed,
            scheduled_for: date(2025, 7, 18),
        },
        Interview {
            application_id: ApplicationId("app-rahul-1".to_string()),
            status: InterviewStatus::Scheduled,
            scheduled_for: date(2025, 8, 1),
        },
    ];

    SeedData {
        students,
        certificates,
        applications,
        interviews,
    }
}
