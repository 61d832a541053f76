use crate::matrix_tracking::domain::{Dependency, DependencyMatrix};
use crate::shared::error::MatrixError;
use crate::shared::Result;
use std::collections::BTreeMap;

/// A tracked dependency whose provenance disagrees with its recorded version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDrift {
    /// `host/owner/repo[:component]` of the dependency
    pub dependency: String,
    /// Version recorded in the matrix
    pub version: String,
    /// Every source, rendered as `version: path`, grouped by version
    pub sources: Vec<String>,
}

impl From<VersionDrift> for MatrixError {
    fn from(drift: VersionDrift) -> Self {
        MatrixError::InconsistentVersions {
            dependency: drift.dependency,
            version: drift.version,
            sources: drift.sources,
        }
    }
}

/// ConsistencyVerifier checks that every provenance path of a dependency
/// agrees with the others and with the version the matrix records.
pub struct ConsistencyVerifier;

impl ConsistencyVerifier {
    /// Fails on the first dependency with drifting sources.
    pub fn verify(matrix: &DependencyMatrix) -> Result<()> {
        match matrix.dependencies.iter().find_map(Self::check) {
            Some(drift) => Err(MatrixError::from(drift).into()),
            None => Ok(()),
        }
    }

    /// Collects every drifting dependency, in matrix order.
    pub fn find_drift(matrix: &DependencyMatrix) -> Vec<VersionDrift> {
        matrix.dependencies.iter().filter_map(Self::check).collect()
    }

    fn check(dependency: &Dependency) -> Option<VersionDrift> {
        if dependency.sources.is_empty() {
            return None;
        }

        let mut by_version: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for source in &dependency.sources {
            by_version
                .entry(source.version.as_str())
                .or_default()
                .push(source.path.to_string());
        }

        if by_version.len() == 1 && by_version.contains_key(dependency.version.as_str()) {
            return None;
        }

        let sources = by_version
            .into_iter()
            .flat_map(|(version, paths)| {
                paths
                    .into_iter()
                    .map(move |path| format!("{}: {}", version, path))
            })
            .collect();

        Some(VersionDrift {
            dependency: dependency.to_string(),
            version: dependency.version.clone(),
            sources,
        })
    }
}
