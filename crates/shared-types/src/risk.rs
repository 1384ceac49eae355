use serde::{Deserialize, Serialize};

use crate::common::{id_from_string_or_number, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Physical,
    Chemical,
    Biological,
    Ergonomic,
    Accident,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Active,
    Controlled,
    Eliminated,
}

/// An occupational hazard tracked for one or more client companies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationalRisk {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub category: RiskCategory,
    pub severity: Severity,
    pub description: String,
    pub preventive_measures: String,
    #[serde(default)]
    pub affected_employees: Vec<String>,
    #[serde(default)]
    pub companies: Vec<String>,
    pub last_assessment: String,
    pub next_assessment: String,
    pub status: RiskStatus,
}

impl OccupationalRisk {
    /// High and critical risks still active need attention on the dashboard.
    pub fn needs_attention(&self) -> bool {
        self.status == RiskStatus::Active && self.severity >= Severity::High
    }
}

impl Record for OccupationalRisk {
    fn id(&self) -> &str {
        &self.id
    }
}
