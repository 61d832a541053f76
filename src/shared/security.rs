use crate::shared::error::MatrixError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for matrix and update files we are willing to load (10 MB).
/// A matrix with tens of thousands of entries stays far below this.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Rejects symbolic links so a checkout cannot redirect matrix reads or
/// writes outside of the repository.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| MatrixError::FileReadError {
        path: path.to_path_buf(),
        details: format!("failed to read metadata for {}: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(MatrixError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Replace the link with a regular file".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path is a regular file (not a directory or symlink).
///
/// A directory yields [`MatrixError::IsADirectory`], which is the error the
/// matrix store reports for a `matrix.yaml` directory.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    validate_not_symlink(path, file_description)?;

    let metadata = fs::metadata(path).map_err(|e| MatrixError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_dir() {
        return Err(MatrixError::IsADirectory {
            path: path.to_path_buf(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} {} is not a regular file", file_description, path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(MatrixError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "file is too large ({} bytes, maximum is {} bytes)",
                file_size, max_size
            ),
            hint: "Check that the path points at a dependency matrix or updates file".to_string(),
        }
        .into());
    }
    Ok(())
}
