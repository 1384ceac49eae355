//! Sample records for the views that have no backend collection yet
//! (clinic staff, exams, ASO, risks).

use shared_types::{
    ClinicStaff, ExamStatus, ExamType, FitnessResult, MedicalExam, OccupationalRisk,
    RecordStatus, RiskCategory, RiskStatus, Severity, StaffRole,
};

fn staff(
    id: &str,
    name: &str,
    role: StaffRole,
    registration_number: &str,
    specialty: Option<&str>,
    email: &str,
    phone: &str,
    hire_date: &str,
) -> ClinicStaff {
    ClinicStaff {
        id: id.to_string(),
        name: name.to_string(),
        role,
        registration_number: registration_number.to_string(),
        specialty: specialty.map(str::to_string),
        email: email.to_string(),
        phone: phone.to_string(),
        hire_date: hire_date.to_string(),
        status: RecordStatus::Active,
    }
}

pub fn clinic_staff() -> Vec<ClinicStaff> {
    vec![
        staff("1", "Dr. Maria Silva", StaffRole::Doctor, "CRM-SP 123456", Some("Occupational Medicine"), "admin@clinic.com", "(11) 99999-0001", "2020-01-15"),
        staff("2", "Dr. João Santos", StaffRole::Doctor, "CRM-RJ 789012", Some("Occupational Medicine"), "doctor@clinic.com", "(21) 99999-0002", "2021-03-20"),
        staff("3", "Enfª. Ana Costa", StaffRole::Nurse, "COREN-SP 345678", None, "ana.costa@clinic.com", "(11) 99999-0003", "2021-06-10"),
        staff("4", "Carlos Lima", StaffRole::Technician, "CRT-SP 901234", None, "carlos.lima@clinic.com", "(11) 99999-0004", "2022-02-01"),
        staff("5", "Fernanda Oliveira", StaffRole::Administrator, "ADM-001", None, "fernanda.oliveira@clinic.com", "(11) 99999-0005", "2020-08-15"),
    ]
}

fn exam(
    id: &str,
    employee: &str,
    company: &str,
    exam_type: ExamType,
    date: &str,
    status: ExamStatus,
    result: Option<FitnessResult>,
) -> MedicalExam {
    MedicalExam {
        id: id.to_string(),
        employee: employee.to_string(),
        company: company.to_string(),
        exam_type,
        date: date.to_string(),
        time: "09:00".to_string(),
        doctor: "Dr. João Santos".to_string(),
        status,
        result,
        observations: None,
    }
}

pub fn medical_exams() -> Vec<MedicalExam> {
    vec![
        exam("1", "João Silva", "TechCorp", ExamType::Periodic, "2024-02-05", ExamStatus::Completed, Some(FitnessResult::Fit)),
        exam("2", "Maria Santos", "InnovaCorp", ExamType::Admission, "2024-02-08", ExamStatus::Completed, Some(FitnessResult::Fit)),
        exam("3", "Carlos Oliveira", "BuildCorp", ExamType::ReturnToWork, "2024-02-10", ExamStatus::Completed, Some(FitnessResult::FitWithRestrictions)),
        exam("4", "Ana Costa", "TechCorp", ExamType::Periodic, "2024-02-15", ExamStatus::Scheduled, None),
        exam("5", "Pedro Souza", "BuildCorp", ExamType::Dismissal, "2024-02-16", ExamStatus::InProgress, None),
    ]
}

fn risk(
    id: &str,
    name: &str,
    category: RiskCategory,
    severity: Severity,
    description: &str,
    preventive_measures: &str,
    companies: &[&str],
    status: RiskStatus,
) -> OccupationalRisk {
    OccupationalRisk {
        id: id.to_string(),
        name: name.to_string(),
        category,
        severity,
        description: description.to_string(),
        preventive_measures: preventive_measures.to_string(),
        affected_employees: Vec::new(),
        companies: companies.iter().map(|c| c.to_string()).collect(),
        last_assessment: "2024-01-10".to_string(),
        next_assessment: "2024-07-10".to_string(),
        status,
    }
}

pub fn occupational_risks() -> Vec<OccupationalRisk> {
    vec![
        risk("1", "Excessive noise", RiskCategory::Physical, Severity::High, "Exposure above 85 dB on the production floor", "Hearing protection, rotation", &["BuildCorp"], RiskStatus::Active),
        risk("2", "Solvent vapours", RiskCategory::Chemical, Severity::Critical, "Handling of organic solvents without exhaust", "Local exhaust ventilation, respirators", &["InnovaCorp"], RiskStatus::Active),
        risk("3", "Repetitive strain", RiskCategory::Ergonomic, Severity::Medium, "Prolonged keyboard work", "Ergonomic furniture, breaks", &["TechCorp"], RiskStatus::Controlled),
        risk("4", "Falls from height", RiskCategory::Accident, Severity::High, "Scaffolding work above 2 m", "Harness, guardrails", &["BuildCorp"], RiskStatus::Eliminated),
    ]
}
