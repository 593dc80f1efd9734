//! Which text fields the search box looks at for each record type.

use crate::lifecycle::domain::{
    AuditLogEntry, ComplianceItem, Device, FirmwareVersion, ServiceOrder,
};
use crate::lifecycle::services::FieldAccessor;

/// Record types with a fixed, ordered set of searchable fields
pub trait Searchable: Sized + 'static {
    fn search_fields() -> &'static [FieldAccessor<Self>];
}

fn device_name(device: &Device) -> &str {
    &device.name
}

fn device_serial_number(device: &Device) -> &str {
    &device.serial_number
}

fn device_customer(device: &Device) -> &str {
    &device.customer
}

const DEVICE_FIELDS: &[FieldAccessor<Device>] = &[
    device_name,
    device_serial_number,
    device_customer,
];

fn firmware_name(firmware: &FirmwareVersion) -> &str {
    &firmware.name
}

fn firmware_version(firmware: &FirmwareVersion) -> &str {
    &firmware.version
}

fn firmware_device_model(firmware: &FirmwareVersion) -> &str {
    &firmware.device_model
}

const FIRMWARE_FIELDS: &[FieldAccessor<FirmwareVersion>] = &[
    firmware_name,
    firmware_version,
    firmware_device_model,
];

fn order_title(order: &ServiceOrder) -> &str {
    &order.title
}

fn order_technician(order: &ServiceOrder) -> &str {
    &order.technician
}

fn order_location(order: &ServiceOrder) -> &str {
    &order.location
}

const SERVICE_ORDER_FIELDS: &[FieldAccessor<ServiceOrder>] = &[
    order_title,
    order_technician,
    order_location,
];

fn entry_user(entry: &AuditLogEntry) -> &str {
    &entry.user
}

fn entry_action(entry: &AuditLogEntry) -> &str {
    &entry.action
}

fn entry_firmware(entry: &AuditLogEntry) -> &str {
    &entry.firmware
}

const AUDIT_LOG_FIELDS: &[FieldAccessor<AuditLogEntry>] = &[
    entry_user,
    entry_action,
    entry_firmware,
];

fn item_firmware_version(item: &ComplianceItem) -> &str {
    &item.firmware_version
}

fn item_device_model(item: &ComplianceItem) -> &str {
    &item.device_model
}

fn item_submitter(item: &ComplianceItem) -> &str {
    &item.submitter
}

const COMPLIANCE_FIELDS: &[FieldAccessor<ComplianceItem>] = &[
    item_firmware_version,
    item_device_model,
    item_submitter,
];

impl Searchable for Device {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        DEVICE_FIELDS
    }
}

impl Searchable for FirmwareVersion {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        FIRMWARE_FIELDS
    }
}

impl Searchable for ServiceOrder {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        SERVICE_ORDER_FIELDS
    }
}

impl Searchable for AuditLogEntry {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        AUDIT_LOG_FIELDS
    }
}

impl Searchable for ComplianceItem {
    fn search_fields() -> &'static [FieldAccessor<Self>] {
        COMPLIANCE_FIELDS
    }
}
