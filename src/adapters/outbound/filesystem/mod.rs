/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod matrix_store;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use matrix_store::{FileSystemMatrixStore, MatrixLock, MATRIX_LOCK_FILE_NAME};
