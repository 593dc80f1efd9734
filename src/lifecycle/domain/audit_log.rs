use super::status::AuditOutcome;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// One entry of the firmware download audit trail.
///
/// Entries are kept in storage order; timestamps are not required to be sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: String,
    pub user: String,
    pub action: String,
    /// Firmware reference as "<model> <version>"
    pub firmware: String,
    #[serde(with = "audit_timestamp")]
    pub timestamp: NaiveDateTime,
    pub ip_address: IpAddr,
    pub status: AuditOutcome,
}

/// Audit timestamps use `YYYY-MM-DD HH:MM:SS`
pub mod audit_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
