use crate::matrix_tracking::domain::{DependencyUpdate, DEPENDENCY_MATRIX_MARKDOWN_FILE_NAME};
use std::path::PathBuf;

/// UpdateMatrixRequest - request DTO for recording a dependency update
#[derive(Debug, Clone)]
pub struct UpdateMatrixRequest {
    /// Repository checkout owning the matrix
    pub repo_dir: PathBuf,
    /// The update applied directly to this repository
    pub update: DependencyUpdate,
    /// Local path or URL of the `dependency-updates.yaml` published by the
    /// release the update pulled in
    pub upstream: Option<String>,
    /// Explicit tracking switch; derived from the matrix directory when `None`
    pub enabled: Option<bool>,
    /// Markdown file name inside the matrix directory
    pub markdown_file: String,
    /// Whether to hold the advisory lock for the read-modify-write cycle
    pub lock: bool,
}

impl UpdateMatrixRequest {
    pub fn new(repo_dir: PathBuf, update: DependencyUpdate) -> Self {
        Self {
            repo_dir,
            update,
            upstream: None,
            enabled: None,
            markdown_file: DEPENDENCY_MATRIX_MARKDOWN_FILE_NAME.to_string(),
            lock: true,
        }
    }

    pub fn with_upstream(mut self, upstream: Option<String>) -> Self {
        self.upstream = upstream;
        self
    }

    pub fn with_enabled(mut self, enabled: Option<bool>) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_markdown_file(mut self, markdown_file: impl Into<String>) -> Self {
        self.markdown_file = markdown_file.into();
        self
    }

    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }
}

/// UpdateMatrixResponse - outcome of recording a dependency update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMatrixResponse {
    /// False when matrix tracking is disabled for the repository
    pub applied: bool,
    /// Dependencies appended to the matrix
    pub added: usize,
    /// Existing dependencies that were refreshed
    pub updated: usize,
    /// Size of the matrix after the update
    pub total: usize,
}

impl UpdateMatrixResponse {
    pub fn skipped() -> Self {
        Self::default()
    }
}
