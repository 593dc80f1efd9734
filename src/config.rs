//! Configuration file support for fleet-views.
//!
//! Provides YAML-based configuration through `fleet-views.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::lifecycle::services::MAX_GRID_LENGTH;
use crate::shared::error::ViewError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "fleet-views.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub page_size: Option<usize>,
    pub dataset: Option<PathBuf>,
    pub calendar: Option<CalendarConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Grid layout overrides for the calendar view.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct CalendarConfig {
    pub grid_length: Option<usize>,
    pub leading_offset: Option<usize>,
}

impl ConfigFile {
    /// The configured output format, if any.
    ///
    /// Validation has already checked the label, so this only fails for a
    /// hand-built config.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|label| {
                OutputFormat::from_str(label)
                    .map_err(|message| anyhow::Error::from(ViewError::Validation { message }))
            })
            .transpose()
    }

    pub fn grid_length(&self) -> Option<usize> {
        self.calendar.as_ref().and_then(|c| c.grid_length)
    }

    pub fn leading_offset(&self) -> Option<usize> {
        self.calendar.as_ref().and_then(|c| c.leading_offset)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.page_size == Some(0) {
        return Err(invalid_config(
            "page_size must be greater than zero.\n\n💡 Hint: Remove the field to use the default of 6 items per page.",
        ));
    }
    if let Some(grid_length) = config.grid_length() {
        if grid_length == 0 || grid_length > MAX_GRID_LENGTH {
            return Err(invalid_config(&format!(
                "calendar.grid_length must be between 1 and {}.\n\n💡 Hint: A five-week grid has 35 cells.",
                MAX_GRID_LENGTH
            )));
        }
    }
    if let Some(format) = config.format.as_deref() {
        if OutputFormat::from_str(format).is_err() {
            return Err(invalid_config(&format!(
                "unknown format '{}'.\n\n💡 Hint: Use 'markdown' or 'json'.",
                format
            )));
        }
    }
    Ok(())
}

fn invalid_config(detail: &str) -> anyhow::Error {
    ViewError::Validation {
        message: format!("Invalid config: {}", detail),
    }
    .into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
