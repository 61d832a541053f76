use crate::matrix_tracking::domain::DependencyMatrix;
use crate::shared::Result;
use std::path::Path;

/// Shape of the `dependency-matrix` directory inside a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixDirState {
    Present,
    Absent,
    /// The name exists but is not a directory
    NotADirectory,
}

/// MatrixRepository port for persisting the dependency matrix of a repository
///
/// All paths are repository roots; implementations resolve the
/// `dependency-matrix` directory themselves.
pub trait MatrixRepository {
    /// Held for the duration of a read-modify-write cycle. Dropping it
    /// releases the lock.
    type Guard;

    fn matrix_dir_state(&self, repo_dir: &Path) -> MatrixDirState;

    /// Blocks until this process exclusively owns the matrix directory.
    fn acquire_lock(&self, repo_dir: &Path) -> Result<Self::Guard>;

    /// Loads `matrix.yaml`; `Ok(None)` when the file does not exist.
    fn load_matrix(&self, repo_dir: &Path) -> Result<Option<DependencyMatrix>>;

    /// Replaces `matrix.yaml` with the serialized matrix.
    fn save_matrix(&self, repo_dir: &Path, matrix: &DependencyMatrix) -> Result<()>;

    /// Writes the rendered matrix to `file_name` inside the matrix directory.
    fn write_markdown(&self, repo_dir: &Path, file_name: &str, content: &str) -> Result<()>;
}
