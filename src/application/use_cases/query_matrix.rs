use crate::ports::outbound::{MatrixFormatter, MatrixRepository};
use crate::shared::Result;
use std::path::Path;

/// FindVersionUseCase - looks up the recorded version of `host/owner/repo`
///
/// A missing matrix behaves like an empty one.
pub struct FindVersionUseCase<MR> {
    repository: MR,
}

impl<MR: MatrixRepository> FindVersionUseCase<MR> {
    pub fn new(repository: MR) -> Self {
        Self { repository }
    }

    pub fn execute(&self, repo_dir: &Path, host: &str, owner: &str, repo: &str) -> Result<String> {
        self.repository
            .load_matrix(repo_dir)?
            .unwrap_or_default()
            .find_version_for_dependency(host, owner, repo)
    }
}

/// RenderMatrixUseCase - regenerates the markdown from `matrix.yaml`
pub struct RenderMatrixUseCase<MR, F> {
    repository: MR,
    formatter: F,
}

impl<MR, F> RenderMatrixUseCase<MR, F>
where
    MR: MatrixRepository,
    F: MatrixFormatter,
{
    pub fn new(repository: MR, formatter: F) -> Self {
        Self {
            repository,
            formatter,
        }
    }

    /// Returns the number of rendered dependencies.
    pub fn execute(&self, repo_dir: &Path, markdown_file: &str) -> Result<usize> {
        let matrix = self.repository.load_matrix(repo_dir)?.unwrap_or_default();
        let markdown = self.formatter.format(&matrix)?;
        self.repository
            .write_markdown(repo_dir, markdown_file, &markdown)?;
        Ok(matrix.len())
    }
}
