use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish bad input from failures
/// while loading or rendering a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The view was rendered
    Success = 0,
    /// Invalid command-line arguments or an input-contract violation
    InvalidArguments = 2,
    /// Application error (file I/O, dataset parsing, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error returned from a view run.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<ViewError>() {
            Some(view_error) if view_error.is_invalid_argument() => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for building dashboard views.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// The first group of variants are caller contract violations; the rest
/// are failures at the I/O edges.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Invalid page size: {page_size}\n\n💡 Hint: The page size must be greater than zero")]
    InvalidPageSize { page_size: usize },

    #[error("Unknown {kind} status: \"{value}\"\n\n💡 Hint: Expected one of: {expected}")]
    UnknownStatus {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("Invalid calendar month: {year}-{month}\n\n💡 Hint: The month must be between 1 and 12 and the year within the supported calendar range")]
    InvalidCalendarMonth { year: i32, month: u32 },

    #[error("Invalid calendar grid length: {grid_length}\n\n💡 Hint: The grid must have between 1 and {max} cells")]
    InvalidGridLength { grid_length: usize, max: usize },

    #[error("Duplicate id \"{id}\" in {collection}\n\n💡 Hint: Record ids must be unique within each collection")]
    DuplicateRecordId { collection: &'static str, id: String },

    #[error("Dataset file not found: {path}\n\n💡 Hint: {suggestion}")]
    DatasetNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dataset file: {path}\nDetails: {details}\n\n💡 Hint: Please verify the record fields and status labels in the dataset")]
    DatasetParseError { path: PathBuf, details: String },

    #[error("Unsupported dataset format: {path}\n\n💡 Hint: Use a .json, .yml, .yaml or .toml file")]
    UnsupportedDatasetFormat { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for requests and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ViewError {
    /// Returns true when the error reports bad input rather than an
    /// environment failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ViewError::InvalidPageSize { .. }
                | ViewError::UnknownStatus { .. }
                | ViewError::InvalidCalendarMonth { .. }
                | ViewError::InvalidGridLength { .. }
                | ViewError::DuplicateRecordId { .. }
                | ViewError::Validation { .. }
        )
    }
}
