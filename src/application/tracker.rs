//! Single-call entry points wired to the file system adapters.

use crate::adapters::outbound::console::StderrProgressReporter;
use crate::adapters::outbound::filesystem::{FileSystemMatrixStore, FileSystemReader};
use crate::adapters::outbound::formatters::MarkdownFormatter;
use crate::application::dto::{UpdateMatrixRequest, UpdateMatrixResponse, VerifyMatrixRequest};
use crate::application::use_cases::{UpdateMatrixUseCase, VerifyMatrixUseCase};
use crate::matrix_tracking::domain::DependencyUpdate;
use crate::shared::Result;
use std::path::Path;

/// Records `update` in the matrix of the repository at `dir`.
///
/// Does nothing when `dir` has no `dependency-matrix` directory.
pub fn update_dependency_matrix(dir: &Path, update: &DependencyUpdate) -> Result<UpdateMatrixResponse> {
    let use_case = UpdateMatrixUseCase::new(
        FileSystemMatrixStore::new(),
        MarkdownFormatter::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );
    use_case.execute(UpdateMatrixRequest::new(dir.to_path_buf(), update.clone()))
}

/// Fails when any dependency in the matrix at `dir` has sources that
/// disagree with each other or with its recorded version.
pub fn verify_dependency_matrix_has_consistent_versions(dir: &Path) -> Result<()> {
    let use_case = VerifyMatrixUseCase::new(FileSystemMatrixStore::new(), StderrProgressReporter::new());
    use_case.execute(VerifyMatrixRequest::new(dir.to_path_buf()))?;
    Ok(())
}
