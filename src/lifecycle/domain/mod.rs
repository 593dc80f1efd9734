pub mod analytics;
pub mod audit_log;
pub mod compliance;
pub mod device;
pub mod firmware;
pub mod record_store;
pub mod report_metadata;
pub mod service_order;
pub mod status;

pub use analytics::{
    AnalyticsDataset, CustomerSegment, HealthSample, VulnerabilityProfile, WeeklyDeployments,
};
pub use audit_log::AuditLogEntry;
pub use compliance::ComplianceItem;
pub use device::Device;
pub use firmware::FirmwareVersion;
pub use record_store::{Dataset, Identified, RecordStore};
pub use report_metadata::ReportMetadata;
pub use service_order::ServiceOrder;
pub use status::{
    ApprovalStatus, AuditOutcome, DeviceStatus, OrderStatus, OrderType, Priority, StatusLabel,
};
