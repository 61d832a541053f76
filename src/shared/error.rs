use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI pipelines use these to tell a drifted matrix apart from a broken run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed and the matrix is consistent
    Success = 0,
    /// The dependency matrix records diverging versions for a dependency
    DriftDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, YAML, network, malformed input, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned by a command.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<MatrixError>() {
            Some(MatrixError::InconsistentVersions { .. }) => ExitCode::DriftDetected,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::DriftDetected => write!(f, "Drift Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency matrix tracking.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("failed to parse dependency update message {message:?}: {details}")]
    MalformedMessage { message: String, details: String },

    #[error("{path} is a directory")]
    IsADirectory { path: PathBuf },

    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("reading {path}: {details}")]
    FileReadError { path: PathBuf, details: String },

    #[error("writing {path}: {details}")]
    FileWriteError { path: PathBuf, details: String },

    #[error("unmarshaling {path}: {details}")]
    ParseError { path: PathBuf, details: String },

    #[error("marshaling {path}: {details}")]
    SerializeError { path: PathBuf, details: String },

    #[error(
        "could not find a dependency on host {host}, owner {owner}, repo {repo} in the dependency matrix"
    )]
    DependencyNotFound {
        host: String,
        owner: String,
        repo: String,
    },

    #[error("dependency {dependency} is recorded at version {version} but its sources resolve to: {}", .sources.join(", "))]
    InconsistentVersions {
        dependency: String,
        version: String,
        sources: Vec<String>,
    },

    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Please specify the directory of a repository checkout")]
    InvalidRepositoryPath { path: PathBuf, reason: String },

    #[error("Failed to fetch dependency updates from {location}\nDetails: {details}")]
    AssetFetchError { location: String, details: String },

    /// Validation error for requests and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
