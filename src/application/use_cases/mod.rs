/// Use cases module containing application business logic orchestration
mod collect_updates;
mod query_matrix;
mod update_matrix;
mod verify_matrix;

pub use collect_updates::{split_commit_messages, CollectUpdatesUseCase};
pub use query_matrix::{FindVersionUseCase, RenderMatrixUseCase};
pub use update_matrix::UpdateMatrixUseCase;
pub use verify_matrix::VerifyMatrixUseCase;
