use super::status::ApprovalStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A firmware build available for distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareVersion {
    pub id: String,
    pub name: String,
    pub version: String,
    pub device_model: String,
    pub release_date: NaiveDate,
    pub file_size: String,
    /// Opaque digest as published; never verified here
    pub checksum: String,
    pub status: ApprovalStatus,
    pub downloads: u64,
}
