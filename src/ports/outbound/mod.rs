/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod formatter;
pub mod matrix_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod updates_asset_reader;

pub use formatter::MatrixFormatter;
pub use matrix_repository::{MatrixDirState, MatrixRepository};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use updates_asset_reader::UpdatesAssetReader;
