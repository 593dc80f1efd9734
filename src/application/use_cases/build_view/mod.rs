use crate::application::dto::{ViewKind, ViewRequest};
use crate::application::read_models::{
    DashboardReadModel, FilterView, ViewModel, ViewModelBuilder,
};
use crate::lifecycle::services::{validate_grid_length, ReportMetadataGenerator};
use crate::ports::inbound::DashboardViewPort;
use crate::ports::outbound::{DatasetReader, ProgressReporter};
use crate::shared::error::ViewError;
use crate::shared::Result;
use chrono::Local;

/// BuildViewUseCase - Core use case rendering one dashboard screen
///
/// This use case orchestrates one refresh: load the records, run the
/// pure filter/aggregate/paginate/calendar services and stamp the result
/// with report metadata.
///
/// # Type Parameters
/// * `DR` - DatasetReader implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildViewUseCase<DR, PR> {
    dataset_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> BuildViewUseCase<DR, PR>
where
    DR: DatasetReader,
    PR: ProgressReporter,
{
    /// Creates a new BuildViewUseCase with injected dependencies
    pub fn new(dataset_reader: DR, progress_reporter: PR) -> Self {
        Self {
            dataset_reader,
            progress_reporter,
        }
    }

    /// Executes the view-building use case
    ///
    /// # Arguments
    /// * `request` - Screen, search and paging options
    ///
    /// # Returns
    /// The read model of the requested screen
    pub fn execute(&self, request: ViewRequest) -> Result<DashboardReadModel> {
        // Step 1: Reject contract violations before touching the dataset
        Self::validate(&request)?;

        // Step 2: Load the record store
        self.progress_reporter.report(&format!(
            "📂 Loading dataset from: {}",
            self.dataset_reader.source_name()
        ));
        let store = self.dataset_reader.read_dataset()?;
        self.progress_reporter
            .report(&format!("✅ Loaded {}", store.summary_line()));

        // Step 3: Build the screen
        let view = match request.kind {
            ViewKind::Inventory => {
                ViewModel::Inventory(ViewModelBuilder::build_inventory(&store, &request)?)
            }
            ViewKind::ServiceBoard => {
                ViewModel::ServiceBoard(ViewModelBuilder::build_service_board(&store, &request)?)
            }
            ViewKind::Calendar => ViewModel::Calendar(ViewModelBuilder::build_calendar(
                &store,
                &request,
                Local::now().date_naive(),
            )?),
            ViewKind::Firmware => {
                ViewModel::Firmware(ViewModelBuilder::build_firmware(&store, &request)?)
            }
            ViewKind::AuditLog => {
                ViewModel::AuditLog(ViewModelBuilder::build_audit_log(&store, &request)?)
            }
            ViewKind::Compliance => {
                ViewModel::Compliance(ViewModelBuilder::build_compliance(&store, &request)?)
            }
            ViewKind::Analytics => {
                if !request.query.is_empty() {
                    self.progress_reporter.report_error(
                        "⚠️  Warning: The analytics view is not searchable; the query is ignored.",
                    );
                }
                ViewModel::Analytics(ViewModelBuilder::build_analytics(store.analytics()))
            }
        };

        if let Some(matched) = view.matched_records() {
            if !request.query.is_empty() || request.status.is_some() {
                self.progress_reporter
                    .report(&format!("🔎 {} record(s) match the filter", matched));
            }
        }

        // Step 4: Stamp report metadata
        let metadata = ReportMetadataGenerator::generate_default_metadata();

        Ok(DashboardReadModel {
            metadata: ViewModelBuilder::build_metadata(&metadata),
            title: request.kind.title().to_string(),
            filter: FilterView {
                query: request.query,
                status: request.status,
            },
            view,
        })
    }

    fn validate(request: &ViewRequest) -> Result<()> {
        if request.page_size == 0 {
            return Err(ViewError::InvalidPageSize {
                page_size: request.page_size,
            }
            .into());
        }
        validate_grid_length(request.calendar.grid_length)?;
        if request.kind == ViewKind::Analytics && request.status.is_some() {
            return Err(ViewError::Validation {
                message: "the analytics view has no status filter".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl<DR, PR> DashboardViewPort for BuildViewUseCase<DR, PR>
where
    DR: DatasetReader,
    PR: ProgressReporter,
{
    fn build_view(&self, request: ViewRequest) -> Result<DashboardReadModel> {
        self.execute(request)
    }
}
