pub mod aggregator;
pub mod calendar;
pub mod filter_engine;
pub mod paginator;
mod report_metadata_generator;

pub use aggregator::{
    count_by_status, count_where, percentage, ratio, round_half_up, sum_field, StatusCounts,
};
pub use calendar::{
    days_in_month, leading_offset_for, next_month, place_on_grid, previous_month,
    validate_grid_length, DayCell, DEFAULT_GRID_LENGTH, MAX_GRID_LENGTH,
};
pub use filter_engine::{filter, filter_searchable, FieldAccessor};
pub use paginator::{next_page, paginate, previous_page, Page, DEFAULT_PAGE_SIZE};
pub use report_metadata_generator::ReportMetadataGenerator;
