//! dep-matrix - dependency matrix tracking for repositories released by CI bots
//!
//! Every repository that opts in (by containing a `dependency-matrix/`
//! directory) keeps a `matrix.yaml` recording, for each dependency, the
//! version currently used and every provenance path through which a version
//! arrived. A markdown rendering is regenerated on each update, and a
//! consistency check fails when the paths of a dependency disagree.
//!
//! # Architecture
//!
//! - **Domain Layer** (`matrix_tracking`): matrix and update models plus the
//!   pure services (message parser, merger, verifier)
//! - **Application Layer** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): file system, network, console and markdown
//! - **Shared** (`shared`): error types and security checks
//!
//! # Example
//!
//! ```no_run
//! use dep_matrix::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let update = DependencyUpdate::direct(DependencyUpdateDetails {
//!     host: "github.com".to_string(),
//!     owner: "acme".to_string(),
//!     repo: "roadrunner".to_string(),
//!     url: "https://github.com/acme/roadrunner".to_string(),
//!     from_version: "0.0.1".to_string(),
//!     to_version: "0.0.2".to_string(),
//!     ..Default::default()
//! });
//!
//! update_dependency_matrix(Path::new("."), &update)?;
//! verify_dependency_matrix_has_consistent_versions(Path::new("."))?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod matrix_tracking;
pub mod ports;
pub mod shared;

pub use adapters::outbound::formatters::generate_markdown_dependency_matrix;
pub use application::tracker::{
    update_dependency_matrix, verify_dependency_matrix_has_consistent_versions,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemMatrixStore, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        generate_markdown_dependency_matrix, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::network::{AssetReaderRouter, HttpAssetClient};
    pub use crate::application::dto::{
        OutputFormat, UpdateMatrixRequest, UpdateMatrixResponse, VerifyMatrixRequest,
        VerifyMatrixResponse,
    };
    pub use crate::application::tracker::{
        update_dependency_matrix, verify_dependency_matrix_has_consistent_versions,
    };
    pub use crate::application::use_cases::{
        CollectUpdatesUseCase, FindVersionUseCase, RenderMatrixUseCase, UpdateMatrixUseCase,
        VerifyMatrixUseCase,
    };
    pub use crate::matrix_tracking::domain::{
        Dependency, DependencyDetails, DependencyMatrix, DependencyMessage, DependencyPath,
        DependencySource, DependencyUpdate, DependencyUpdateDetails, DependencyUpdatePath,
        DependencyUpdates,
    };
    pub use crate::matrix_tracking::services::{
        ConsistencyVerifier, DependencyMessageParser, MatrixMerger, MergeOutcome,
        UpstreamPathPrepender, VersionDrift,
    };
    pub use crate::ports::outbound::{
        MatrixDirState, MatrixFormatter, MatrixRepository, OutputPresenter, ProgressReporter,
        UpdatesAssetReader,
    };
    pub use crate::shared::error::{ExitCode, MatrixError};
    pub use crate::shared::Result;
}
