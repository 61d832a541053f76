use std::path::PathBuf;

/// VerifyMatrixRequest - request DTO for the consistency gate
#[derive(Debug, Clone)]
pub struct VerifyMatrixRequest {
    pub repo_dir: PathBuf,
}

impl VerifyMatrixRequest {
    pub fn new(repo_dir: PathBuf) -> Self {
        Self { repo_dir }
    }
}

/// VerifyMatrixResponse - a consistent (or absent) matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyMatrixResponse {
    /// False when the repository has no `matrix.yaml`
    pub matrix_found: bool,
    /// Number of dependencies checked
    pub checked: usize,
}
