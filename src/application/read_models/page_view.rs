use crate::lifecycle::services::Page;
use serde::Serialize;

/// One visible page with its position and the guarded display labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub start_index: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub page_label: String,
    pub range_label: String,
}

impl<T> PageView<T> {
    /// Copies a borrowed page into an owned view, converting each item
    pub fn from_page<S>(page: &Page<'_, S>, to_item: impl Fn(&S) -> T) -> Self {
        Self {
            items: page.items().iter().map(to_item).collect(),
            page: page.effective_page(),
            total_pages: page.total_pages(),
            total_items: page.total_items(),
            page_size: page.page_size(),
            start_index: page.start_index(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            page_label: page.page_label(),
            range_label: page.range_label(),
        }
    }
}
