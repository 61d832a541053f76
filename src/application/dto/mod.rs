/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod update_matrix;
mod verify_matrix;

pub use output_format::OutputFormat;
pub use update_matrix::{UpdateMatrixRequest, UpdateMatrixResponse};
pub use verify_matrix::{VerifyMatrixRequest, VerifyMatrixResponse};
