use super::{DependencyUpdateDetails, DependencyUpdatePath};
use crate::shared::error::MatrixError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Directory inside a repository checkout whose presence opts the
/// repository into matrix tracking.
pub const DEPENDENCY_MATRIX_DIR_NAME: &str = "dependency-matrix";
/// File the matrix is persisted to, inside [`DEPENDENCY_MATRIX_DIR_NAME`].
pub const DEPENDENCY_MATRIX_YAML_FILE_NAME: &str = "matrix.yaml";
/// Default file the markdown rendering is written to.
pub const DEPENDENCY_MATRIX_MARKDOWN_FILE_NAME: &str = "matrix.md";
/// Name of the matrix when attached to a release on the git provider.
pub const DEPENDENCY_MATRIX_ASSET_NAME: &str = "dependency-matrix.yaml";

/// One repository on a provenance path, pinned at the version it released.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DependencyDetails {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub component: String,
    pub version: String,
    pub version_url: String,
}

impl DependencyDetails {
    pub fn key_equals(&self, other: &DependencyUpdateDetails) -> bool {
        self.host == other.host
            && self.owner == other.owner
            && self.repo == other.repo
            && self.component == other.component
    }
}

impl From<&DependencyUpdateDetails> for DependencyDetails {
    fn from(update: &DependencyUpdateDetails) -> Self {
        Self {
            host: update.host.clone(),
            owner: update.owner.clone(),
            repo: update.repo.clone(),
            url: update.url.clone(),
            component: update.component.clone(),
            version: update.to_version.clone(),
            version_url: update.to_release_html_url.clone(),
        }
    }
}

impl fmt::Display for DependencyDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.repo)?;
        if !self.component.is_empty() {
            write!(f, ":{}", self.component)?;
        }
        Ok(())
    }
}

/// Persisted provenance path: the chain of repositories a version arrived through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyPath(pub Vec<DependencyDetails>);

impl DependencyPath {
    /// Element-wise key comparison against the path carried by an update.
    pub fn path_equals(&self, other: &DependencyUpdatePath) -> bool {
        self.0.len() == other.len()
            && self
                .0
                .iter()
                .zip(other.iter())
                .all(|(mine, theirs)| mine.key_equals(theirs))
    }

    /// Each element hyperlinked to its repository, joined by `;`.
    pub fn markdown(&self) -> String {
        self.0
            .iter()
            .map(|e| format!("[{}]({})", e, e.url))
            .collect::<Vec<_>>()
            .join(";")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&DependencyUpdatePath> for DependencyPath {
    fn from(path: &DependencyUpdatePath) -> Self {
        Self(path.iter().map(DependencyDetails::from).collect())
    }
}

impl fmt::Display for DependencyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", rendered.join(";"))
    }
}

/// A path that asserted a version for a tracked dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DependencySource {
    pub path: DependencyPath,
    pub version: String,
    pub version_url: String,
}

/// A tracked dependency: the version currently resolved plus its provenance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dependency {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub component: String,
    pub version: String,
    pub version_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<DependencySource>,
}

impl Dependency {
    /// Matrix entries are unique by (owner, repo, component).
    pub fn matches(&self, update: &DependencyUpdateDetails) -> bool {
        self.owner == update.owner && self.repo == update.repo && self.component == update.component
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.repo)?;
        if !self.component.is_empty() {
            write!(f, ":{}", self.component)?;
        }
        Ok(())
    }
}

/// The dependency matrix of one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyMatrix {
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl DependencyMatrix {
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Returns the recorded version of the first dependency on `host/owner/repo`,
    /// whatever its component.
    pub fn find_version_for_dependency(&self, host: &str, owner: &str, repo: &str) -> Result<String> {
        self.dependencies
            .iter()
            .find(|d| d.host == host && d.owner == owner && d.repo == repo)
            .map(|d| d.version.clone())
            .ok_or_else(|| {
                MatrixError::DependencyNotFound {
                    host: host.to_string(),
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                }
                .into()
            })
    }
}
