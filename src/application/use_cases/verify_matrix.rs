use crate::application::dto::{VerifyMatrixRequest, VerifyMatrixResponse};
use crate::matrix_tracking::services::ConsistencyVerifier;
use crate::ports::outbound::{MatrixRepository, ProgressReporter};
use crate::shared::error::MatrixError;
use crate::shared::Result;

/// VerifyMatrixUseCase - the consistency gate run before a release
///
/// A repository without a `matrix.yaml` passes with a warning. Every
/// drifting dependency is reported; the first one is returned as the error.
pub struct VerifyMatrixUseCase<MR, PR> {
    repository: MR,
    progress_reporter: PR,
}

impl<MR, PR> VerifyMatrixUseCase<MR, PR>
where
    MR: MatrixRepository,
    PR: ProgressReporter,
{
    pub fn new(repository: MR, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: VerifyMatrixRequest) -> Result<VerifyMatrixResponse> {
        let Some(matrix) = self.repository.load_matrix(&request.repo_dir)? else {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: no dependency matrix found in {}, skipping verification",
                request.repo_dir.display()
            ));
            return Ok(VerifyMatrixResponse::default());
        };

        let mut drift = ConsistencyVerifier::find_drift(&matrix).into_iter();
        let Some(first) = drift.next() else {
            return Ok(VerifyMatrixResponse {
                matrix_found: true,
                checked: matrix.len(),
            });
        };

        for other in drift {
            self.progress_reporter.report_error(&format!(
                "❌ {}",
                MatrixError::from(other)
            ));
        }
        Err(MatrixError::from(first).into())
    }
}
