use crate::lifecycle::domain::{OrderStatus, ServiceOrder};
use chrono::NaiveDate;
use serde::Serialize;

/// Stat cards of the account-service screen, over all orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Orders handled by internal technicians
    pub internal_orders: usize,
}

/// Service orders grouped into one column per status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceBoardView {
    pub summary: ServiceSummary,
    pub columns: Vec<KanbanColumn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanColumn {
    pub status: OrderStatus,
    pub orders: Vec<ServiceOrder>,
}

/// A `(year, month)` pair used for calendar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

/// Service orders placed on a month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub summary: ServiceSummary,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub weekday_headers: Vec<String>,
    pub leading_offset: usize,
    pub grid_length: usize,
    pub previous: MonthRef,
    pub next: MonthRef,
    /// Orders that passed the filter, in any month
    pub matched_orders: usize,
    pub cells: Vec<CalendarCell>,
}

impl CalendarView {
    /// Orders that landed on a cell of this grid
    pub fn placed_orders(&self) -> usize {
        self.cells.iter().map(|cell| cell.orders.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day: i64,
    pub date: Option<NaiveDate>,
    pub in_current_month: bool,
    pub orders: Vec<ServiceOrder>,
}
