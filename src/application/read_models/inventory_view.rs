use super::page_view::PageView;
use crate::lifecycle::domain::Device;
use serde::Serialize;

/// Device inventory screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryView {
    pub summary: InventorySummary,
    pub page: PageView<Device>,
}

/// Stat cards above the inventory table, over the whole fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total: usize,
    pub online: usize,
    pub maintenance: usize,
    pub offline: usize,
}
