use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// ViewFormatter port for rendering a read model
///
/// This port abstracts the output format (Markdown, JSON).
pub trait ViewFormatter {
    /// Formats one screen's read model
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &DashboardReadModel) -> Result<String>;
}
