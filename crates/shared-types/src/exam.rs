use serde::{Deserialize, Serialize};

use crate::common::{id_from_string_or_number, Record};

/// Occupational exam kind required by labor regulations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExamType {
    Admission,
    Periodic,
    ReturnToWork,
    Dismissal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Fitness-for-work outcome recorded on the ASO.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessResult {
    Fit,
    Unfit,
    FitWithRestrictions,
}

impl ExamType {
    pub fn label(&self) -> &'static str {
        match self {
            ExamType::Admission => "Admission",
            ExamType::Periodic => "Periodic",
            ExamType::ReturnToWork => "Return to Work",
            ExamType::Dismissal => "Dismissal",
        }
    }
}

impl FitnessResult {
    pub fn label(&self) -> &'static str {
        match self {
            FitnessResult::Fit => "Fit",
            FitnessResult::Unfit => "Unfit",
            FitnessResult::FitWithRestrictions => "Fit with Restrictions",
        }
    }
}

/// A scheduled or performed medical exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalExam {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub employee: String,
    pub company: String,
    #[serde(rename = "type")]
    pub exam_type: ExamType,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub status: ExamStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<FitnessResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl MedicalExam {
    /// An ASO can be issued once the exam is completed with a recorded result.
    pub fn ready_for_aso(&self) -> bool {
        self.status == ExamStatus::Completed && self.result.is_some()
    }
}

impl Record for MedicalExam {
    fn id(&self) -> &str {
        &self.id
    }
}
