use crate::lifecycle::domain::{Dataset, RecordStore};
use crate::ports::outbound::DatasetReader;
use crate::shared::Result;
use anyhow::Context;

const SEED_DATASET: &str = include_str!("seed_dataset.json");

/// The built-in demo fleet shown when no dataset file is given
///
/// # Errors
/// Returns an error only if the embedded document is malformed.
pub fn seed_dataset() -> Result<Dataset> {
    serde_json::from_str(SEED_DATASET).context("Failed to parse the built-in seed dataset")
}

/// SeedDatasetReader adapter serving the built-in dataset
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedDatasetReader;

impl SeedDatasetReader {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetReader for SeedDatasetReader {
    fn read_dataset(&self) -> Result<RecordStore> {
        RecordStore::new(seed_dataset()?)
    }

    fn source_name(&self) -> String {
        "built-in seed data".to_string()
    }
}
