use crate::matrix_tracking::domain::{
    Dependency, DependencyMatrix, DependencyPath, DependencySource, DependencyUpdate,
};

/// What merging an update did to the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// An existing entry was moved to the new version
    Updated,
    /// A previously untracked dependency was appended
    Added,
}

/// MatrixMerger folds dependency updates into a matrix.
///
/// Pure in-memory logic; loading and persisting the matrix is the job of
/// the `MatrixRepository` port.
pub struct MatrixMerger;

impl MatrixMerger {
    /// Applies `update` to `matrix`.
    ///
    /// An entry matching (owner, repo, component) is moved to the update's
    /// target version and each of the update's paths either refreshes the
    /// source with a key-equal path or is appended as a new source. Without a
    /// matching entry exactly one new entry is appended. Sources of every
    /// entry are left sorted by their rendered path.
    pub fn apply(matrix: &mut DependencyMatrix, update: &DependencyUpdate) -> MergeOutcome {
        let details = &update.details;

        let outcome = match matrix.dependencies.iter().position(|d| d.matches(details)) {
            Some(index) => {
                let existing = &mut matrix.dependencies[index];
                existing.host = details.host.clone();
                existing.url = details.url.clone();
                existing.version = details.to_version.clone();
                existing.version_url = details.to_release_html_url.clone();

                for path in &update.paths {
                    let source = DependencySource {
                        path: DependencyPath::from(path),
                        version: details.to_version.clone(),
                        version_url: details.to_release_html_url.clone(),
                    };
                    match existing.sources.iter().position(|s| s.path.path_equals(path)) {
                        Some(i) => existing.sources[i] = source,
                        None => existing.sources.push(source),
                    }
                }
                MergeOutcome::Updated
            }
            None => {
                let sources = update
                    .paths
                    .iter()
                    .map(|path| DependencySource {
                        path: DependencyPath::from(path),
                        version: details.to_version.clone(),
                        version_url: details.to_release_html_url.clone(),
                    })
                    .collect();
                matrix.dependencies.push(Dependency {
                    host: details.host.clone(),
                    owner: details.owner.clone(),
                    repo: details.repo.clone(),
                    url: details.url.clone(),
                    component: details.component.clone(),
                    version: details.to_version.clone(),
                    version_url: details.to_release_html_url.clone(),
                    sources,
                });
                MergeOutcome::Added
            }
        };

        for dependency in &mut matrix.dependencies {
            dependency
                .sources
                .sort_by_cached_key(|s| s.path.to_string());
        }

        outcome
    }
}
