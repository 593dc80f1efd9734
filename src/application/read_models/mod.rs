//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a presentation-ready representation of one dashboard screen.

pub mod analytics_view;
pub mod compliance_view;
pub mod dashboard_read_model;
pub mod deployment_view;
pub mod inventory_view;
pub mod page_view;
pub mod service_view;
pub mod view_model_builder;

pub use analytics_view::{
    AnalyticsView, HealthRow, SegmentRow, VulnerabilityRow, VulnerabilitySummary,
};
pub use compliance_view::{ComplianceSummary, ComplianceView};
pub use dashboard_read_model::{DashboardReadModel, FilterView, ReportMetadataView, ViewModel};
pub use deployment_view::{AuditLogView, DeploymentSummary, FirmwareView};
pub use inventory_view::{InventorySummary, InventoryView};
pub use page_view::PageView;
pub use service_view::{
    CalendarCell, CalendarView, KanbanColumn, MonthRef, ServiceBoardView, ServiceSummary,
};
pub use view_model_builder::ViewModelBuilder;
