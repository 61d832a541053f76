use crate::matrix_tracking::domain::DependencyUpdates;
use crate::ports::outbound::UpdatesAssetReader;
use crate::shared::error::MatrixError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading update files from the file system
///
/// Implements the UpdatesAssetReader port for local paths and offers the
/// same checked read for the other inputs the CLI accepts (single update
/// files, commit message files).
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    pub fn read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        if !path.exists() {
            return Err(MatrixError::FileReadError {
                path: path.to_path_buf(),
                details: format!("{} does not exist", file_type),
            }
            .into());
        }

        validate_regular_file(path, file_type)?;

        fs::read_to_string(path).map_err(|e| {
            MatrixError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Reads and decodes a YAML document of type `T`.
    pub fn read_yaml<T: serde::de::DeserializeOwned>(&self, path: &Path, file_type: &str) -> Result<T> {
        let content = self.read_file(path, file_type)?;
        serde_yaml_ng::from_str(&content).map_err(|e| {
            MatrixError::ParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdatesAssetReader for FileSystemReader {
    fn read_updates(&self, location: &str) -> Result<DependencyUpdates> {
        self.read_yaml(Path::new(location), "dependency updates file")
    }
}
