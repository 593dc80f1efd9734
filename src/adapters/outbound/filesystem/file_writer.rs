use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ViewError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter writing the rendered view to a file
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> ViewError {
        ViewError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    /// The parent directory must already exist; it is never created
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(self
                    .write_error(format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ))
                    .into());
            }
        }
        Ok(())
    }

    /// An existing output path must not be a symbolic link
    fn validate_not_symlink(&self) -> Result<()> {
        match fs::symlink_metadata(&self.output_path) {
            Ok(metadata) if metadata.file_type().is_symlink() => Err(self
                .write_error(
                    "Security: Output path is a symbolic link. Writing through symbolic links is not allowed.",
                )
                .into()),
            Ok(metadata) if metadata.is_dir() => Err(self
                .write_error("Output path is a directory")
                .into()),
            _ => Ok(()),
        }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_not_symlink()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;
        Ok(())
    }
}

/// StdoutPresenter adapter writing the rendered view to stdout
#[derive(Debug, Default)]
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
