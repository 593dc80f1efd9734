use super::status::DeviceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A managed hardware asset tracked by the inventory screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub model: String,
    pub location: String,
    pub status: DeviceStatus,
    pub firmware_version: String,
    pub last_update: NaiveDate,
    pub customer: String,
}
