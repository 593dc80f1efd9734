use super::page_view::PageView;
use crate::lifecycle::domain::{AuditLogEntry, FirmwareVersion};
use serde::Serialize;

/// Stat cards shared by the firmware and audit-log tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeploymentSummary {
    pub approved_firmware: usize,
    pub pending_firmware: usize,
    pub total_downloads: u64,
    pub audit_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirmwareView {
    pub summary: DeploymentSummary,
    pub page: PageView<FirmwareVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditLogView {
    pub summary: DeploymentSummary,
    pub page: PageView<AuditLogEntry>,
}
