use crate::application::read_models::DashboardReadModel;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the full read model
///
/// The screen content sits under `view`, tagged with its `kind`.
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ViewFormatter for JsonFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}
