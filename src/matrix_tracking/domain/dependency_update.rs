use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the release asset that carries the updates a release pulled in.
pub const DEPENDENCY_UPDATES_ASSET_NAME: &str = "dependency-updates.yaml";

/// Canonical identity and resolution of one dependency bump.
///
/// The identity key is (host, owner, repo, component); the remaining fields
/// describe the versions and releases on either side of the bump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DependencyUpdateDetails {
    pub host: String,
    pub owner: String,
    pub repo: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub component: String,
    pub url: String,
    pub from_version: String,
    #[serde(rename = "fromReleaseHTMLURL")]
    pub from_release_html_url: String,
    pub from_release_name: String,
    pub to_version: String,
    #[serde(rename = "toReleaseHTMLURL")]
    pub to_release_html_url: String,
    pub to_release_name: String,
}

impl fmt::Display for DependencyUpdateDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.host, self.owner, self.repo)?;
        if !self.component.is_empty() {
            write!(f, ":{}", self.component)?;
        }
        Ok(())
    }
}

/// Chain of intermediate repository bumps that transitively caused an update,
/// ordered from the repository nearest to the matrix owner outwards.
pub type DependencyUpdatePath = Vec<DependencyUpdateDetails>;

/// A dependency bump plus every independent path through which it was observed.
/// Direct updates carry no paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyUpdate {
    #[serde(flatten)]
    pub details: DependencyUpdateDetails,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<DependencyUpdatePath>,
}

impl DependencyUpdate {
    pub fn direct(details: DependencyUpdateDetails) -> Self {
        Self {
            details,
            paths: Vec::new(),
        }
    }

    pub fn with_paths(details: DependencyUpdateDetails, paths: Vec<DependencyUpdatePath>) -> Self {
        Self { details, paths }
    }
}

/// Wrapper published as the `dependency-updates.yaml` release asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyUpdates {
    #[serde(default)]
    pub updates: Vec<DependencyUpdate>,
}

impl DependencyUpdates {
    pub fn new(updates: Vec<DependencyUpdate>) -> Self {
        Self { updates }
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}
