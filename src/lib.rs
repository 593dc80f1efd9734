//! fleet-views - Hardware lifecycle dashboard views
//!
//! This library turns fleet records (devices, service orders, firmware,
//! download audit entries and compliance submissions) into presentation-ready
//! dashboard screens: searched, status-narrowed, paginated, aggregated and
//! laid out on month grids. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`lifecycle`): Records, closed status sets and pure view services
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use fleet_views::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let dataset_reader = SeedDatasetReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = BuildViewUseCase::new(dataset_reader, progress_reporter);
//!
//! // Execute
//! let request = ViewRequest::new(ViewKind::Compliance).with_query("xr");
//! let read_model = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = MarkdownFormatter::new();
//! let output = formatter.format(&read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod lifecycle;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DatasetFileReader, DatasetFormat, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::seed::{seed_dataset, SeedDatasetReader};
    pub use crate::application::dto::{CalendarRequest, OutputFormat, ViewKind, ViewRequest};
    pub use crate::application::read_models::{
        AnalyticsView, AuditLogView, CalendarView, ComplianceView, DashboardReadModel,
        FirmwareView, InventoryView, PageView, ServiceBoardView, ViewModel,
    };
    pub use crate::application::use_cases::BuildViewUseCase;
    pub use crate::lifecycle::domain::{
        ApprovalStatus, AuditLogEntry, AuditOutcome, ComplianceItem, Dataset, Device,
        DeviceStatus, FirmwareVersion, OrderStatus, OrderType, Priority, RecordStore,
        ServiceOrder, StatusLabel,
    };
    pub use crate::lifecycle::policies::Searchable;
    pub use crate::lifecycle::services::{
        count_by_status, filter, filter_searchable, paginate, percentage, place_on_grid, ratio,
    };
    pub use crate::ports::inbound::DashboardViewPort;
    pub use crate::ports::outbound::{
        DatasetReader, OutputPresenter, ProgressReporter, ViewFormatter,
    };
    pub use crate::shared::error::{ExitCode, ViewError};
    pub use crate::shared::Result;
}
