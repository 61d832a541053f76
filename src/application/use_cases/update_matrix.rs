use crate::application::dto::{UpdateMatrixRequest, UpdateMatrixResponse};
use crate::matrix_tracking::domain::{DependencyUpdate, DEPENDENCY_MATRIX_DIR_NAME};
use crate::matrix_tracking::services::{MatrixMerger, MergeOutcome, UpstreamPathPrepender};
use crate::ports::outbound::{
    MatrixDirState, MatrixFormatter, MatrixRepository, ProgressReporter, UpdatesAssetReader,
};
use crate::shared::Result;
use anyhow::Context;

/// UpdateMatrixUseCase - records a dependency update in a repository's matrix
///
/// Workflow: resolve whether tracking is enabled, gather the direct update
/// plus any upstream updates, then under the lock load, merge, save and
/// regenerate the markdown rendering.
///
/// # Type Parameters
/// * `MR` - MatrixRepository implementation
/// * `F` - MatrixFormatter implementation
/// * `UR` - UpdatesAssetReader implementation
/// * `PR` - ProgressReporter implementation
pub struct UpdateMatrixUseCase<MR, F, UR, PR> {
    repository: MR,
    formatter: F,
    asset_reader: UR,
    progress_reporter: PR,
}

impl<MR, F, UR, PR> UpdateMatrixUseCase<MR, F, UR, PR>
where
    MR: MatrixRepository,
    F: MatrixFormatter,
    UR: UpdatesAssetReader,
    PR: ProgressReporter,
{
    pub fn new(repository: MR, formatter: F, asset_reader: UR, progress_reporter: PR) -> Self {
        Self {
            repository,
            formatter,
            asset_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: UpdateMatrixRequest) -> Result<UpdateMatrixResponse> {
        if !self.is_enabled(&request) {
            return Ok(UpdateMatrixResponse::skipped());
        }

        // Fetch before locking so a slow download does not hold up other writers.
        let updates = self.gather_updates(&request)?;

        let _guard = if request.lock {
            Some(self.repository.acquire_lock(&request.repo_dir)?)
        } else {
            None
        };

        let mut matrix = self
            .repository
            .load_matrix(&request.repo_dir)?
            .unwrap_or_default();

        let mut response = UpdateMatrixResponse {
            applied: true,
            ..Default::default()
        };
        for update in &updates {
            match MatrixMerger::apply(&mut matrix, update) {
                MergeOutcome::Added => response.added += 1,
                MergeOutcome::Updated => response.updated += 1,
            }
        }
        response.total = matrix.len();

        self.repository.save_matrix(&request.repo_dir, &matrix)?;

        let markdown = self.formatter.format(&matrix)?;
        self.repository
            .write_markdown(&request.repo_dir, &request.markdown_file, &markdown)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Recorded {} in the dependency matrix ({} added, {} updated)",
            request.update.details, response.added, response.updated
        ));

        Ok(response)
    }

    fn is_enabled(&self, request: &UpdateMatrixRequest) -> bool {
        if let Some(enabled) = request.enabled {
            return enabled;
        }

        match self.repository.matrix_dir_state(&request.repo_dir) {
            MatrixDirState::Present => true,
            MatrixDirState::Absent => false,
            MatrixDirState::NotADirectory => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: {} exists in {} but is not a directory, dependency matrix tracking is disabled",
                    DEPENDENCY_MATRIX_DIR_NAME,
                    request.repo_dir.display()
                ));
                false
            }
        }
    }

    /// The direct update first, then every update published upstream.
    fn gather_updates(&self, request: &UpdateMatrixRequest) -> Result<Vec<DependencyUpdate>> {
        let mut updates = vec![request.update.clone()];

        if let Some(location) = &request.upstream {
            self.progress_reporter
                .report(&format!("📥 Reading upstream dependency updates from {}", location));
            let upstream = self
                .asset_reader
                .read_updates(location)
                .with_context(|| format!("reading upstream updates for {}", request.update.details))?;
            let upstream_count = upstream.updates.len();
            updates.extend(UpstreamPathPrepender::prepend(upstream, &request.update.details));
            self.progress_reporter
                .report(&format!("   Found {} upstream update(s)", upstream_count));
        }

        Ok(updates)
    }
}
