//! Dashboard read model for query operations
//!
//! One read model describes one rendered screen: report metadata, the
//! filter that produced it and the screen-specific view.

use super::analytics_view::AnalyticsView;
use super::compliance_view::ComplianceView;
use super::deployment_view::{AuditLogView, FirmwareView};
use super::inventory_view::InventoryView;
use super::service_view::{CalendarView, ServiceBoardView};
use serde::Serialize;

/// Main read model for one dashboard screen
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReadModel {
    pub metadata: ReportMetadataView,
    pub title: String,
    pub filter: FilterView,
    pub view: ViewModel,
}

/// View representation of report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMetadataView {
    /// RFC 3339 timestamp of the render
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// `urn:uuid:` identifier unique per render
    pub report_id: String,
}

/// The search state that produced the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView {
    pub query: String,
    pub status: Option<String>,
}

/// Screen-specific content, tagged by screen name in JSON output
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ViewModel {
    Inventory(InventoryView),
    ServiceBoard(ServiceBoardView),
    Calendar(CalendarView),
    Firmware(FirmwareView),
    AuditLog(AuditLogView),
    Compliance(ComplianceView),
    Analytics(AnalyticsView),
}

impl ViewModel {
    /// Records left after search and status narrowing, before pagination.
    ///
    /// `None` for the analytics screen, which is not searchable.
    pub fn matched_records(&self) -> Option<usize> {
        match self {
            ViewModel::Inventory(view) => Some(view.page.total_items),
            ViewModel::ServiceBoard(view) => {
                Some(view.columns.iter().map(|column| column.orders.len()).sum())
            }
            ViewModel::Calendar(view) => Some(view.matched_orders),
            ViewModel::Firmware(view) => Some(view.page.total_items),
            ViewModel::AuditLog(view) => Some(view.page.total_items),
            ViewModel::Compliance(view) => Some(view.page.total_items),
            ViewModel::Analytics(_) => None,
        }
    }
}
