use fleet_views::prelude::*;

/// Mock DatasetReader serving an in-memory dataset
pub struct MockDatasetReader {
    dataset: Dataset,
    should_fail: bool,
}

#[allow(dead_code)]
impl MockDatasetReader {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            should_fail: false,
        }
    }

    /// Serves the built-in seed records
    pub fn seeded() -> Self {
        Self::new(seed_dataset().unwrap())
    }

    pub fn empty() -> Self {
        Self::new(Dataset::default())
    }

    pub fn with_failure() -> Self {
        Self {
            dataset: Dataset::default(),
            should_fail: true,
        }
    }
}

impl DatasetReader for MockDatasetReader {
    fn read_dataset(&self) -> Result<RecordStore> {
        if self.should_fail {
            anyhow::bail!("Mock dataset read failure");
        }
        RecordStore::new(self.dataset.clone())
    }

    fn source_name(&self) -> String {
        "mock dataset".to_string()
    }
}
