use super::status::{OrderStatus, OrderType, Priority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled technician visit shown on the Kanban board and calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: String,
    pub title: String,
    pub technician: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub location: String,
    pub date: NaiveDate,
    /// Display time of day, kept as entered (e.g. "09:00 AM")
    pub time: String,
    pub status: OrderStatus,
    pub priority: Priority,
}
