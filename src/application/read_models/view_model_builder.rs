//! Builder for constructing screen read models from the record store
//!
//! Every screen follows the same flow: search the designated fields,
//! narrow by status, then paginate, group or place on the calendar.
//! Stat-card summaries are computed over the whole collection.

use super::analytics_view::{
    AnalyticsView, HealthRow, SegmentRow, VulnerabilityRow, VulnerabilitySummary,
};
use super::compliance_view::{ComplianceSummary, ComplianceView};
use super::dashboard_read_model::ReportMetadataView;
use super::deployment_view::{AuditLogView, DeploymentSummary, FirmwareView};
use super::inventory_view::{InventorySummary, InventoryView};
use super::page_view::PageView;
use super::service_view::{
    CalendarCell, CalendarView, KanbanColumn, MonthRef, ServiceBoardView, ServiceSummary,
};
use crate::application::dto::{CalendarRequest, ViewRequest};
use crate::lifecycle::domain::{
    AnalyticsDataset, ApprovalStatus, ComplianceItem, Device, DeviceStatus, OrderStatus,
    OrderType, RecordStore, ReportMetadata, ServiceOrder, StatusLabel,
};
use crate::lifecycle::policies::Searchable;
use crate::lifecycle::services::calendar::{month_name, weekday_headers};
use crate::lifecycle::services::{
    count_by_status, count_where, filter_searchable, leading_offset_for, next_month, paginate,
    percentage, place_on_grid, previous_month, sum_field,
};
use crate::shared::Result;
use chrono::{Datelike, NaiveDate};

/// Builder for constructing screen read models from the record store
pub struct ViewModelBuilder;

impl ViewModelBuilder {
    /// Converts domain metadata to view representation
    pub fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
        }
    }

    pub fn build_inventory(store: &RecordStore, request: &ViewRequest) -> Result<InventoryView> {
        let matched = search(store.devices(), request, |device: &Device| device.status)?;

        Ok(InventoryView {
            summary: Self::inventory_summary(store.devices()),
            page: page_of(&matched, request)?,
        })
    }

    pub fn build_service_board(
        store: &RecordStore,
        request: &ViewRequest,
    ) -> Result<ServiceBoardView> {
        let matched = search(store.service_orders(), request, |order: &ServiceOrder| {
            order.status
        })?;

        let columns = OrderStatus::all()
            .iter()
            .map(|status| KanbanColumn {
                status: *status,
                orders: matched
                    .iter()
                    .filter(|order| order.status == *status)
                    .map(|order| ServiceOrder::clone(order))
                    .collect(),
            })
            .collect();

        Ok(ServiceBoardView {
            summary: Self::service_summary(store.service_orders()),
            columns,
        })
    }

    /// Places the matching service orders on the requested month.
    ///
    /// `today` is the fallback target when neither the request nor the
    /// dataset names a month.
    pub fn build_calendar(
        store: &RecordStore,
        request: &ViewRequest,
        today: NaiveDate,
    ) -> Result<CalendarView> {
        let calendar = &request.calendar;
        let (year, month) = Self::calendar_target(store.service_orders(), calendar, today);
        let matched = search(store.service_orders(), request, |order: &ServiceOrder| {
            order.status
        })?;

        let leading_offset = match calendar.leading_offset {
            Some(offset) => offset,
            None => leading_offset_for(year, month, calendar.week_start)?,
        };

        let cells = place_on_grid(
            &matched,
            |order| order.date,
            year,
            month,
            calendar.grid_length,
            leading_offset,
        )?
        .into_iter()
        .map(|cell| CalendarCell {
            day: cell.day,
            date: cell.date,
            in_current_month: cell.in_current_month(),
            orders: cell
                .records
                .iter()
                .map(|order| ServiceOrder::clone(order))
                .collect(),
        })
        .collect();

        let (previous_year, previous) = previous_month(year, month);
        let (next_year, next) = next_month(year, month);

        Ok(CalendarView {
            summary: Self::service_summary(store.service_orders()),
            year,
            month,
            month_name: month_name(year, month)?.to_string(),
            weekday_headers: weekday_headers(calendar.week_start),
            leading_offset,
            grid_length: calendar.grid_length,
            previous: MonthRef {
                year: previous_year,
                month: previous,
            },
            next: MonthRef {
                year: next_year,
                month: next,
            },
            matched_orders: matched.len(),
            cells,
        })
    }

    pub fn build_firmware(store: &RecordStore, request: &ViewRequest) -> Result<FirmwareView> {
        let matched = search(store.firmware(), request, |firmware| firmware.status)?;

        Ok(FirmwareView {
            summary: Self::deployment_summary(store),
            page: page_of(&matched, request)?,
        })
    }

    pub fn build_audit_log(store: &RecordStore, request: &ViewRequest) -> Result<AuditLogView> {
        let matched = search(store.audit_log(), request, |entry| entry.status)?;

        Ok(AuditLogView {
            summary: Self::deployment_summary(store),
            page: page_of(&matched, request)?,
        })
    }

    pub fn build_compliance(
        store: &RecordStore,
        request: &ViewRequest,
    ) -> Result<ComplianceView> {
        let matched = search(store.compliance(), request, |item: &ComplianceItem| {
            item.status
        })?;

        Ok(ComplianceView {
            summary: Self::compliance_summary(store.compliance()),
            page: page_of(&matched, request)?,
        })
    }

    pub fn build_analytics(analytics: &AnalyticsDataset) -> AnalyticsView {
        let total_segment_devices = sum_field(&analytics.customer_segments, |segment| {
            u64::from(segment.devices)
        });

        let health = analytics
            .device_health
            .iter()
            .map(|sample| HealthRow {
                month: sample.month.clone(),
                healthy: sample.healthy,
                issues: sample.issues,
                critical: sample.critical,
                total: sample.total(),
            })
            .collect();

        let segments = analytics
            .customer_segments
            .iter()
            .map(|segment| SegmentRow {
                name: segment.name.clone(),
                devices: segment.devices,
                share: percentage(u64::from(segment.devices), total_segment_devices),
            })
            .collect();

        let vulnerabilities = analytics
            .vulnerability_profiles
            .iter()
            .map(|profile| VulnerabilityRow {
                device_model: profile.device_model.clone(),
                critical: profile.critical,
                high: profile.high,
                medium: profile.medium,
                low: profile.low,
                total: profile.total(),
            })
            .collect();

        let profiles = &analytics.vulnerability_profiles;
        AnalyticsView {
            health,
            segments,
            total_segment_devices,
            weekly_deployments: analytics.weekly_deployments.clone(),
            total_deployments: sum_field(&analytics.weekly_deployments, |week| {
                u64::from(week.deployments)
            }),
            vulnerabilities,
            vulnerability_summary: VulnerabilitySummary {
                total: sum_field(profiles, |profile| profile.total()),
                critical_and_high: sum_field(profiles, |profile| profile.critical_and_high()),
                clean_devices: count_where(profiles, |profile| profile.is_clean()),
            },
        }
    }

    fn inventory_summary(devices: &[Device]) -> InventorySummary {
        let counts = count_by_status(devices, |device| device.status);
        InventorySummary {
            total: devices.len(),
            online: counts.get(&DeviceStatus::Online),
            maintenance: counts.get(&DeviceStatus::Maintenance),
            offline: counts.get(&DeviceStatus::Offline),
        }
    }

    fn service_summary(orders: &[ServiceOrder]) -> ServiceSummary {
        let counts = count_by_status(orders, |order| order.status);
        ServiceSummary {
            scheduled: counts.get(&OrderStatus::Scheduled),
            in_progress: counts.get(&OrderStatus::InProgress),
            completed: counts.get(&OrderStatus::Completed),
            internal_orders: count_where(orders, |order| order.order_type == OrderType::Internal),
        }
    }

    fn deployment_summary(store: &RecordStore) -> DeploymentSummary {
        let counts = count_by_status(store.firmware(), |firmware| firmware.status);
        DeploymentSummary {
            approved_firmware: counts.get(&ApprovalStatus::Approved),
            pending_firmware: counts.get(&ApprovalStatus::Pending),
            total_downloads: sum_field(store.firmware(), |firmware| firmware.downloads),
            audit_entries: store.audit_log().len(),
        }
    }

    fn compliance_summary(items: &[ComplianceItem]) -> ComplianceSummary {
        let counts = count_by_status(items, |item| item.status);
        let total = items.len();
        let approved = counts.get(&ApprovalStatus::Approved);
        let pending = counts.get(&ApprovalStatus::Pending);

        ComplianceSummary {
            total,
            approved,
            pending,
            deprecated: counts.get(&ApprovalStatus::Deprecated),
            total_vulnerabilities: sum_field(items, |item| u64::from(item.vulnerabilities)),
            approval_rate: percentage(approved as u64, total as u64),
            pending_rate: percentage(pending as u64, total as u64),
        }
    }

    /// Requested month, else the month of the earliest order, else `today`
    fn calendar_target(
        orders: &[ServiceOrder],
        calendar: &CalendarRequest,
        today: NaiveDate,
    ) -> (i32, u32) {
        let fallback = orders.iter().map(|order| order.date).min().unwrap_or(today);
        (
            calendar.year.unwrap_or_else(|| fallback.year()),
            calendar.month.unwrap_or_else(|| fallback.month()),
        )
    }
}

/// Query filter followed by the optional status narrowing
fn search<'a, T, S, F>(records: &'a [T], request: &ViewRequest, status_of: F) -> Result<Vec<&'a T>>
where
    T: Searchable,
    S: StatusLabel + PartialEq,
    F: Fn(&T) -> S,
{
    let matched = filter_searchable(records, &request.query);
    match request.status.as_deref() {
        None => Ok(matched),
        Some(label) => {
            let wanted = S::parse_label(label)?;
            Ok(matched
                .into_iter()
                .filter(|record| status_of(*record) == wanted)
                .collect())
        }
    }
}

fn page_of<T: Clone>(matched: &[&T], request: &ViewRequest) -> Result<PageView<T>> {
    let page = paginate(matched, request.page_size, request.page)?;
    Ok(PageView::from_page(&page, |record| T::clone(record)))
}
