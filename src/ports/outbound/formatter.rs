use crate::matrix_tracking::domain::DependencyMatrix;
use crate::shared::Result;

/// MatrixFormatter port for rendering a dependency matrix for humans
///
/// The rendered document is regenerated from scratch after every update,
/// so implementations must be deterministic for a given matrix.
pub trait MatrixFormatter {
    /// Renders the whole matrix
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, matrix: &DependencyMatrix) -> Result<String>;
}
