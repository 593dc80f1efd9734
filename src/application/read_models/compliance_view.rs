use super::page_view::PageView;
use crate::lifecycle::domain::ComplianceItem;
use serde::Serialize;

/// Stat cards of the compliance screen, over the whole review queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub deprecated: usize,
    pub total_vulnerabilities: u64,
    /// Approved share of all items, whole percent
    pub approval_rate: u32,
    /// Pending share of all items, whole percent
    pub pending_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceView {
    pub summary: ComplianceSummary,
    pub page: PageView<ComplianceItem>,
}
