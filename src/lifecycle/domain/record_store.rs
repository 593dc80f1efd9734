use super::analytics::AnalyticsDataset;
use super::audit_log::AuditLogEntry;
use super::compliance::ComplianceItem;
use super::device::Device;
use super::firmware::FirmwareVersion;
use super::service_order::ServiceOrder;
use crate::shared::error::ViewError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Records that carry an id unique within their collection
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Device {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ServiceOrder {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for FirmwareVersion {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for AuditLogEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for ComplianceItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw record collections as read from the seed data or a dataset file.
///
/// Every collection is optional in a dataset document and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub service_orders: Vec<ServiceOrder>,
    #[serde(default)]
    pub firmware: Vec<FirmwareVersion>,
    #[serde(default)]
    pub audit_log: Vec<AuditLogEntry>,
    #[serde(default)]
    pub compliance: Vec<ComplianceItem>,
    #[serde(default)]
    pub analytics: AnalyticsDataset,
}

/// Validated, read-only record collections for one session.
///
/// The store is built once and only handed out as shared slices, so no
/// view can mutate another view's input.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dataset: Dataset,
}

impl RecordStore {
    /// Creates a record store, checking that ids are unique per collection.
    ///
    /// # Errors
    /// Returns `ViewError::DuplicateRecordId` naming the first repeated id.
    pub fn new(dataset: Dataset) -> Result<Self> {
        ensure_unique_ids("devices", &dataset.devices)?;
        ensure_unique_ids("service_orders", &dataset.service_orders)?;
        ensure_unique_ids("firmware", &dataset.firmware)?;
        ensure_unique_ids("audit_log", &dataset.audit_log)?;
        ensure_unique_ids("compliance", &dataset.compliance)?;

        Ok(Self { dataset })
    }

    pub fn devices(&self) -> &[Device] {
        &self.dataset.devices
    }

    pub fn service_orders(&self) -> &[ServiceOrder] {
        &self.dataset.service_orders
    }

    pub fn firmware(&self) -> &[FirmwareVersion] {
        &self.dataset.firmware
    }

    pub fn audit_log(&self) -> &[AuditLogEntry] {
        &self.dataset.audit_log
    }

    pub fn compliance(&self) -> &[ComplianceItem] {
        &self.dataset.compliance
    }

    pub fn analytics(&self) -> &AnalyticsDataset {
        &self.dataset.analytics
    }

    /// One-line description of the collection sizes, used in progress output
    pub fn summary_line(&self) -> String {
        format!(
            "{} devices, {} service orders, {} firmware versions, {} audit entries, {} compliance items",
            self.dataset.devices.len(),
            self.dataset.service_orders.len(),
            self.dataset.firmware.len(),
            self.dataset.audit_log.len(),
            self.dataset.compliance.len()
        )
    }
}

fn ensure_unique_ids<T: Identified>(collection: &'static str, records: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(ViewError::DuplicateRecordId {
                collection,
                id: record.id().to_string(),
            }
            .into());
        }
    }
    Ok(())
}
