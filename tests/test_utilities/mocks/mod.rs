/// Mock implementations for testing
mod mock_asset_reader;
mod mock_matrix_repository;
mod mock_progress_reporter;

pub use mock_asset_reader::MockAssetReader;
pub use mock_matrix_repository::MockMatrixRepository;
pub use mock_progress_reporter::MockProgressReporter;
