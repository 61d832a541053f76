pub mod dependency_matrix;
pub mod dependency_message;
pub mod dependency_update;

pub use dependency_matrix::{
    Dependency, DependencyDetails, DependencyMatrix, DependencyPath, DependencySource,
    DEPENDENCY_MATRIX_ASSET_NAME, DEPENDENCY_MATRIX_DIR_NAME,
    DEPENDENCY_MATRIX_MARKDOWN_FILE_NAME, DEPENDENCY_MATRIX_YAML_FILE_NAME,
};
pub use dependency_message::DependencyMessage;
pub use dependency_update::{
    DependencyUpdate, DependencyUpdateDetails, DependencyUpdatePath, DependencyUpdates,
    DEPENDENCY_UPDATES_ASSET_NAME,
};
