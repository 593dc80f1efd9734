use crate::application::read_models::{
    AnalyticsView, AuditLogView, CalendarCell, CalendarView, ComplianceView, DashboardReadModel,
    DeploymentSummary, FilterView, FirmwareView, InventoryView, PageView, ReportMetadataView,
    ServiceBoardView, ServiceSummary, ViewModel,
};
use crate::lifecycle::domain::audit_log::audit_timestamp;
use crate::lifecycle::domain::ServiceOrder;
use crate::lifecycle::services::calendar::month_name;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// Markdown table header for the device inventory
const DEVICE_TABLE_HEADER: &str =
    "| Name | Serial Number | Model | Location | Status | Firmware | Last Update | Customer |\n";
const DEVICE_TABLE_SEPARATOR: &str =
    "|------|---------------|-------|----------|--------|----------|-------------|----------|\n";

const ORDER_TABLE_HEADER: &str =
    "| Title | Technician | Type | Location | Date | Time | Priority |\n";
const ORDER_TABLE_SEPARATOR: &str =
    "|-------|------------|------|----------|------|------|----------|\n";

const FIRMWARE_TABLE_HEADER: &str =
    "| Name | Version | Device Model | Release Date | Size | Checksum | Status | Downloads |\n";
const FIRMWARE_TABLE_SEPARATOR: &str =
    "|------|---------|--------------|--------------|------|----------|--------|-----------|\n";

const AUDIT_TABLE_HEADER: &str = "| Timestamp | User | Action | Firmware | IP Address | Status |\n";
const AUDIT_TABLE_SEPARATOR: &str =
    "|-----------|------|--------|----------|------------|--------|\n";

const COMPLIANCE_TABLE_HEADER: &str =
    "| Firmware | Device Model | Submitter | Submitted | Status | Certifications | Vulnerabilities | Notes |\n";
const COMPLIANCE_TABLE_SEPARATOR: &str =
    "|----------|--------------|-----------|-----------|--------|----------------|-----------------|-------|\n";

/// MarkdownFormatter adapter rendering one screen as Markdown
///
/// Each screen gets its stat cards as a bullet list, its records as a
/// table and, for paginated screens, the page footer.
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl ViewFormatter for MarkdownFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.title, &model.filter, &model.view);
        match &model.view {
            ViewModel::Inventory(view) => self.render_inventory(&mut output, view),
            ViewModel::ServiceBoard(view) => self.render_service_board(&mut output, view),
            ViewModel::Calendar(view) => self.render_calendar(&mut output, view)?,
            ViewModel::Firmware(view) => self.render_firmware(&mut output, view),
            ViewModel::AuditLog(view) => self.render_audit_log(&mut output, view),
            ViewModel::Compliance(view) => self.render_compliance(&mut output, view),
            ViewModel::Analytics(view) => self.render_analytics(&mut output, view),
        }
        self.render_footer(&mut output, &model.metadata);

        Ok(output)
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, title: &str, filter: &FilterView, view: &ViewModel) {
        output.push_str(&format!("# {}\n\n", title));

        let mut parts = Vec::new();
        if !filter.query.is_empty() {
            parts.push(format!("search \"{}\"", filter.query));
        }
        if let Some(status) = &filter.status {
            parts.push(format!("status {}", status));
        }
        if parts.is_empty() {
            return;
        }

        match view.matched_records() {
            Some(matched) => output.push_str(&format!(
                "*Filtered by {} ({} matching {})*\n\n",
                parts.join(", "),
                matched,
                if matched == 1 { "record" } else { "records" }
            )),
            None => output.push_str(&format!("*Filtered by {}*\n\n", parts.join(", "))),
        }
    }

    fn render_summary(&self, output: &mut String, lines: &[(&str, String)]) {
        output.push_str("## Summary\n\n");
        for (label, value) in lines {
            output.push_str(&format!("- **{}:** {}\n", label, value));
        }
        output.push('\n');
    }

    fn render_page_footer<T>(&self, output: &mut String, page: &PageView<T>) {
        output.push_str(&format!("*{}*\n\n", page.range_label));
        output.push_str(&format!("*{}*\n\n", page.page_label));
    }

    fn render_inventory(&self, output: &mut String, view: &InventoryView) {
        let summary = &view.summary;
        self.render_summary(
            output,
            &[
                ("Total devices", summary.total.to_string()),
                ("Online", summary.online.to_string()),
                ("Maintenance", summary.maintenance.to_string()),
                ("Offline", summary.offline.to_string()),
            ],
        );

        output.push_str("## Devices\n\n");
        if view.page.items.is_empty() {
            output.push_str("*No matching devices*\n\n");
        } else {
            output.push_str(DEVICE_TABLE_HEADER);
            output.push_str(DEVICE_TABLE_SEPARATOR);
            for device in &view.page.items {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&device.name),
                    Self::escape_markdown_table_cell(&device.serial_number),
                    Self::escape_markdown_table_cell(&device.model),
                    Self::escape_markdown_table_cell(&device.location),
                    device.status,
                    Self::escape_markdown_table_cell(&device.firmware_version),
                    device.last_update,
                    Self::escape_markdown_table_cell(&device.customer)
                ));
            }
            output.push('\n');
        }
        self.render_page_footer(output, &view.page);
    }

    fn service_summary_lines(summary: &ServiceSummary) -> Vec<(&'static str, String)> {
        vec![
            ("Scheduled", summary.scheduled.to_string()),
            ("In progress", summary.in_progress.to_string()),
            ("Completed", summary.completed.to_string()),
            ("Internal technician orders", summary.internal_orders.to_string()),
        ]
    }

    fn render_order_row(output: &mut String, order: &ServiceOrder) {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&order.title),
            Self::escape_markdown_table_cell(&order.technician),
            order.order_type,
            Self::escape_markdown_table_cell(&order.location),
            order.date,
            Self::escape_markdown_table_cell(&order.time),
            order.priority
        ));
    }

    fn render_service_board(&self, output: &mut String, view: &ServiceBoardView) {
        self.render_summary(output, &Self::service_summary_lines(&view.summary));

        for column in &view.columns {
            output.push_str(&format!(
                "## {} ({})\n\n",
                column.status,
                column.orders.len()
            ));
            if column.orders.is_empty() {
                output.push_str("*No orders*\n\n");
                continue;
            }
            output.push_str(ORDER_TABLE_HEADER);
            output.push_str(ORDER_TABLE_SEPARATOR);
            for order in &column.orders {
                Self::render_order_row(output, order);
            }
            output.push('\n');
        }
    }

    fn render_calendar(&self, output: &mut String, view: &CalendarView) -> Result<()> {
        self.render_summary(output, &Self::service_summary_lines(&view.summary));

        output.push_str(&format!("## {} {}\n\n", view.month_name, view.year));
        output.push_str(&format!(
            "*Previous: {} {} | Next: {} {}*\n\n",
            month_name(view.previous.year, view.previous.month)?,
            view.previous.year,
            month_name(view.next.year, view.next.month)?,
            view.next.year
        ));

        output.push_str(&format!("| {} |\n", view.weekday_headers.join(" | ")));
        output.push_str(&format!(
            "|{}\n",
            "-----|".repeat(view.weekday_headers.len())
        ));
        for week in view.cells.chunks(7) {
            let mut cells: Vec<String> = week.iter().map(Self::calendar_cell_text).collect();
            cells.resize(7, String::new());
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output.push('\n');

        output.push_str("### Orders this month\n\n");
        let placed: Vec<&ServiceOrder> = view
            .cells
            .iter()
            .flat_map(|cell| cell.orders.iter())
            .collect();
        if placed.is_empty() {
            output.push_str("*No orders scheduled this month*\n\n");
            return Ok(());
        }
        for order in placed {
            output.push_str(&format!(
                "- {} {}: {} ({}, {})\n",
                order.date, order.time, order.title, order.technician, order.status
            ));
        }
        output.push('\n');
        Ok(())
    }

    fn calendar_cell_text(cell: &CalendarCell) -> String {
        if !cell.in_current_month {
            return String::new();
        }
        let mut text = format!("**{}**", cell.day);
        for order in &cell.orders {
            text.push_str("<br>");
            text.push_str(&Self::escape_markdown_table_cell(&order.title));
        }
        text
    }

    fn deployment_summary_lines(summary: &DeploymentSummary) -> Vec<(&'static str, String)> {
        vec![
            ("Approved firmware", summary.approved_firmware.to_string()),
            ("Pending approval", summary.pending_firmware.to_string()),
            ("Total downloads", summary.total_downloads.to_string()),
            ("Audit entries", summary.audit_entries.to_string()),
        ]
    }

    fn render_firmware(&self, output: &mut String, view: &FirmwareView) {
        self.render_summary(output, &Self::deployment_summary_lines(&view.summary));

        output.push_str("## Firmware Versions\n\n");
        if view.page.items.is_empty() {
            output.push_str("*No matching firmware*\n\n");
        } else {
            output.push_str(FIRMWARE_TABLE_HEADER);
            output.push_str(FIRMWARE_TABLE_SEPARATOR);
            for firmware in &view.page.items {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&firmware.name),
                    Self::escape_markdown_table_cell(&firmware.version),
                    Self::escape_markdown_table_cell(&firmware.device_model),
                    firmware.release_date,
                    Self::escape_markdown_table_cell(&firmware.file_size),
                    Self::escape_markdown_table_cell(&firmware.checksum),
                    firmware.status,
                    firmware.downloads
                ));
            }
            output.push('\n');
        }
        self.render_page_footer(output, &view.page);
    }

    fn render_audit_log(&self, output: &mut String, view: &AuditLogView) {
        self.render_summary(output, &Self::deployment_summary_lines(&view.summary));

        output.push_str("## Download Audit Trail\n\n");
        if view.page.items.is_empty() {
            output.push_str("*No matching audit entries*\n\n");
        } else {
            output.push_str(AUDIT_TABLE_HEADER);
            output.push_str(AUDIT_TABLE_SEPARATOR);
            for entry in &view.page.items {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    entry.timestamp.format(audit_timestamp::FORMAT),
                    Self::escape_markdown_table_cell(&entry.user),
                    Self::escape_markdown_table_cell(&entry.action),
                    Self::escape_markdown_table_cell(&entry.firmware),
                    entry.ip_address,
                    entry.status
                ));
            }
            output.push('\n');
        }
        self.render_page_footer(output, &view.page);
    }

    fn render_compliance(&self, output: &mut String, view: &ComplianceView) {
        let summary = &view.summary;
        self.render_summary(
            output,
            &[
                ("Total items", summary.total.to_string()),
                (
                    "Approved",
                    format!("{} ({}%)", summary.approved, summary.approval_rate),
                ),
                (
                    "Pending review",
                    format!("{} ({}%)", summary.pending, summary.pending_rate),
                ),
                ("Deprecated", summary.deprecated.to_string()),
                (
                    "Open vulnerabilities",
                    summary.total_vulnerabilities.to_string(),
                ),
            ],
        );

        output.push_str("## Review Queue\n\n");
        if view.page.items.is_empty() {
            output.push_str("*No matching compliance items*\n\n");
        } else {
            output.push_str(COMPLIANCE_TABLE_HEADER);
            output.push_str(COMPLIANCE_TABLE_SEPARATOR);
            for item in &view.page.items {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&item.firmware_version),
                    Self::escape_markdown_table_cell(&item.device_model),
                    Self::escape_markdown_table_cell(&item.submitter),
                    item.submitted_date,
                    item.status,
                    Self::escape_markdown_table_cell(&item.certifications.join(", ")),
                    item.vulnerabilities,
                    Self::escape_markdown_table_cell(&item.notes)
                ));
            }
            output.push('\n');
        }
        self.render_page_footer(output, &view.page);
    }

    fn render_analytics(&self, output: &mut String, view: &AnalyticsView) {
        output.push_str("## Device Health Trend\n\n");
        output.push_str("| Month | Healthy | Issues | Critical | Total |\n");
        output.push_str("|-------|---------|--------|----------|-------|\n");
        for row in &view.health {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.month),
                row.healthy,
                row.issues,
                row.critical,
                row.total
            ));
        }
        output.push('\n');

        output.push_str("## Customer Segments\n\n");
        output.push_str("| Segment | Devices | Share |\n");
        output.push_str("|---------|---------|-------|\n");
        for segment in &view.segments {
            output.push_str(&format!(
                "| {} | {} | {}% |\n",
                Self::escape_markdown_table_cell(&segment.name),
                segment.devices,
                segment.share
            ));
        }
        output.push_str(&format!(
            "\n**Total devices:** {}\n\n",
            view.total_segment_devices
        ));

        output.push_str("## Weekly Deployments\n\n");
        output.push_str("| Week | Deployments |\n");
        output.push_str("|------|-------------|\n");
        for week in &view.weekly_deployments {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&week.week),
                week.deployments
            ));
        }
        output.push_str(&format!(
            "\n**Total deployments:** {}\n\n",
            view.total_deployments
        ));

        output.push_str("## Vulnerability Heatmap\n\n");
        output.push_str("| Device Model | Critical | High | Medium | Low | Total |\n");
        output.push_str("|--------------|----------|------|--------|-----|-------|\n");
        for row in &view.vulnerabilities {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.device_model),
                row.critical,
                row.high,
                row.medium,
                row.low,
                row.total
            ));
        }
        output.push('\n');

        let summary = &view.vulnerability_summary;
        output.push_str(&format!("- **Total vulnerabilities:** {}\n", summary.total));
        output.push_str(&format!(
            "- **Critical and high:** {}\n",
            summary.critical_and_high
        ));
        output.push_str(&format!(
            "- **Devices with zero issues:** {}\n\n",
            summary.clean_devices
        ));
    }

    fn render_footer(&self, output: &mut String, metadata: &ReportMetadataView) {
        output.push_str("---\n\n");
        output.push_str(&format!(
            "*Generated by {} {} at {} ({})*\n",
            metadata.tool_name, metadata.tool_version, metadata.timestamp, metadata.report_id
        ));
    }
}
