/// Mock implementations for testing
mod mock_dataset_reader;
mod mock_progress_reporter;

pub use mock_dataset_reader::MockDatasetReader;
pub use mock_progress_reporter::MockProgressReporter;
