use crate::lifecycle::services::{DEFAULT_GRID_LENGTH, DEFAULT_PAGE_SIZE};
use chrono::Weekday;

use super::ViewKind;

/// ViewRequest - Internal request DTO for the view-building use case
///
/// Carries the whole UI state of one refresh: which screen, the search
/// term, an optional status narrowing and the requested page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    pub kind: ViewKind,
    /// Search box contents; empty keeps every record
    pub query: String,
    /// Status label to narrow to, parsed against the screen's status set
    pub status: Option<String>,
    /// 1-based page; clamped during pagination
    pub page: usize,
    pub page_size: usize,
    pub calendar: CalendarRequest,
}

impl ViewRequest {
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            query: String::new(),
            status: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            calendar: CalendarRequest::default(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_calendar(mut self, calendar: CalendarRequest) -> Self {
        self.calendar = calendar;
        self
    }
}

/// Calendar target and grid layout.
///
/// `None` for the year/month picks the month of the earliest service order;
/// `None` for the offset derives it from the weekday of the 1st.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub grid_length: usize,
    pub leading_offset: Option<usize>,
    pub week_start: Weekday,
}

impl Default for CalendarRequest {
    fn default() -> Self {
        Self {
            year: None,
            month: None,
            grid_length: DEFAULT_GRID_LENGTH,
            leading_offset: None,
            week_start: Weekday::Sun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_request_defaults() {
        let request = ViewRequest::new(ViewKind::Inventory);

        assert_eq!(request.query, "");
        assert_eq!(request.status, None);
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 6);
        assert_eq!(request.calendar.grid_length, 35);
        assert_eq!(request.calendar.week_start, Weekday::Sun);
        assert_eq!(request.calendar.leading_offset, None);
    }

    #[test]
    fn test_view_request_builders() {
        let request = ViewRequest::new(ViewKind::Compliance)
            .with_query("xr")
            .with_status("pending")
            .with_page(2)
            .with_page_size(3);

        assert_eq!(request.kind, ViewKind::Compliance);
        assert_eq!(request.query, "xr");
        assert_eq!(request.status.as_deref(), Some("pending"));
        assert_eq!(request.page, 2);
        assert_eq!(request.page_size, 3);
    }
}
