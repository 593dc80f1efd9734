use crate::shared::error::ViewError;
use crate::shared::Result;

/// Items per page on every list screen
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One page of a collection together with its position.
///
/// An empty collection has zero total pages; its single visible page is
/// page 1 with no items.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    items: &'a [T],
    page_size: usize,
    total_items: usize,
    total_pages: usize,
    effective_page: usize,
    start_index: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`; 0 for an empty collection
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The requested page after clamping into `[1, total_pages]`
    pub fn effective_page(&self) -> usize {
        self.effective_page
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn has_previous(&self) -> bool {
        self.effective_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.effective_page < self.total_pages
    }

    /// "Page X of Y", showing at least one page for an empty collection
    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.effective_page,
            self.total_pages.max(1)
        )
    }

    /// "Showing A to B of N results"
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("Showing 0 to 0 of {} results", self.total_items);
        }
        format!(
            "Showing {} to {} of {} results",
            self.start_index + 1,
            self.start_index + self.items.len(),
            self.total_items
        )
    }
}

/// Slices out the visible page of `records`.
///
/// `current_page` is 1-based and clamped into `[1, total_pages]`, so
/// out-of-range requests never fail.
///
/// # Errors
/// Returns `ViewError::InvalidPageSize` when `page_size` is 0.
pub fn paginate<T>(records: &[T], page_size: usize, current_page: usize) -> Result<Page<'_, T>> {
    let total_pages = total_pages(records.len(), page_size)?;
    let effective_page = clamp_page(current_page, total_pages);

    let start_index = (effective_page - 1) * page_size;
    let end_index = start_index.saturating_add(page_size).min(records.len());

    Ok(Page {
        items: &records[start_index..end_index],
        page_size,
        total_items: records.len(),
        total_pages,
        effective_page,
        start_index,
    })
}

/// Number of pages needed for `total_items`
///
/// # Errors
/// Returns `ViewError::InvalidPageSize` when `page_size` is 0.
pub fn total_pages(total_items: usize, page_size: usize) -> Result<usize> {
    if page_size == 0 {
        return Err(ViewError::InvalidPageSize { page_size }.into());
    }
    Ok(total_items.div_ceil(page_size))
}

/// Clamps a page number into `[1, total_pages]` (1 when there are no pages)
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 1;
    }
    page.clamp(1, total_pages)
}

/// The page after `current`, staying put on the last page
pub fn next_page(current: usize, total_pages: usize) -> usize {
    clamp_page(current.saturating_add(1), total_pages)
}

/// The page before `current`, staying put on the first page
pub fn previous_page(current: usize, total_pages: usize) -> usize {
    clamp_page(current.saturating_sub(1), total_pages)
}
