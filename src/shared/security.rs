use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any file the tool reads (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a dataset or configuration file after checking that it is a
/// regular file within the size limit.
///
/// Symbolic links are rejected: `symlink_metadata()` inspects the link
/// itself, not its target.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description used in error messages (e.g. "dataset")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata can't be read
/// - The path is a symbolic link or not a regular file
/// - The file exceeds [`MAX_FILE_SIZE`]
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let metadata = fs::metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;
    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
