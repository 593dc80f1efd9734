use crate::lifecycle::domain::RecordStore;
use crate::shared::Result;

/// DatasetReader port for loading the fleet records
///
/// This port abstracts where records come from (built-in seed data,
/// a dataset file, a test double).
pub trait DatasetReader {
    /// Reads and validates every record collection
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be read
    /// - A record has an unknown status label or malformed field
    /// - Two records in one collection share an id
    fn read_dataset(&self) -> Result<RecordStore>;

    /// Human-readable name of the source, used in progress output
    fn source_name(&self) -> String;
}
