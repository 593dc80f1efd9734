use crate::lifecycle::domain::{Dataset, RecordStore};
use crate::ports::outbound::DatasetReader;
use crate::shared::error::ViewError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Document formats a dataset file may use, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
    Toml,
}

impl DatasetFormat {
    /// Detects the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "json" => Some(DatasetFormat::Json),
            "yml" | "yaml" => Some(DatasetFormat::Yaml),
            "toml" => Some(DatasetFormat::Toml),
            _ => None,
        }
    }

    fn parse(self, content: &str) -> std::result::Result<Dataset, String> {
        match self {
            DatasetFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DatasetFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            DatasetFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// DatasetFileReader adapter loading records from a JSON, YAML or TOML file
pub struct DatasetFileReader {
    path: PathBuf,
}

impl DatasetFileReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn parse_error(&self, details: String) -> anyhow::Error {
        ViewError::DatasetParseError {
            path: self.path.clone(),
            details,
        }
        .into()
    }
}

impl DatasetReader for DatasetFileReader {
    fn read_dataset(&self) -> Result<RecordStore> {
        if !self.path.exists() {
            return Err(ViewError::DatasetNotFound {
                path: self.path.clone(),
                suggestion: "Check the --data path, or omit it to use the built-in seed data."
                    .to_string(),
            }
            .into());
        }

        let format = DatasetFormat::from_path(&self.path).ok_or_else(|| {
            ViewError::UnsupportedDatasetFormat {
                path: self.path.clone(),
            }
        })?;

        let content = read_regular_file(&self.path, "dataset file").with_context(|| {
            format!("Failed to read dataset file: {}", self.path.display())
        })?;
        let dataset = format
            .parse(&content)
            .map_err(|details| self.parse_error(details))?;

        RecordStore::new(dataset)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
