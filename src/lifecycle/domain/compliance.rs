use super::status::ApprovalStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A firmware release submitted for compliance review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: String,
    pub firmware_version: String,
    pub device_model: String,
    pub submitter: String,
    pub submitted_date: NaiveDate,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Open vulnerabilities found in review, independent of certifications
    pub vulnerabilities: u32,
    #[serde(default)]
    pub notes: String,
}
