use crate::application::dto::ViewRequest;
use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// DashboardViewPort - Inbound port for rendering one dashboard screen
///
/// Each call is one refresh: the dataset is read, filtered and paginated
/// from scratch and nothing is kept between calls.
pub trait DashboardViewPort {
    /// Builds the read model for the requested screen
    ///
    /// # Arguments
    /// * `request` - Screen, search query, page and calendar options
    ///
    /// # Errors
    /// Returns an error if:
    /// - The dataset cannot be read or contains duplicate ids
    /// - The page size is zero
    /// - The status label is not valid for the screen
    /// - The calendar month is invalid
    fn build_view(&self, request: ViewRequest) -> Result<DashboardReadModel>;
}
