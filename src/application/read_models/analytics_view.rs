use crate::lifecycle::domain::WeeklyDeployments;
use serde::Serialize;

/// Analytics screen: the static series plus their derived totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsView {
    pub health: Vec<HealthRow>,
    pub segments: Vec<SegmentRow>,
    pub total_segment_devices: u64,
    pub weekly_deployments: Vec<WeeklyDeployments>,
    pub total_deployments: u64,
    pub vulnerabilities: Vec<VulnerabilityRow>,
    pub vulnerability_summary: VulnerabilitySummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthRow {
    pub month: String,
    pub healthy: u32,
    pub issues: u32,
    pub critical: u32,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentRow {
    pub name: String,
    pub devices: u32,
    /// Share of all segment devices, whole percent
    pub share: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerabilityRow {
    pub device_model: String,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub total: u64,
}

/// Heatmap footer totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VulnerabilitySummary {
    pub total: u64,
    pub critical_and_high: u64,
    /// Device models with no open issue in any severity
    pub clean_devices: usize,
}
