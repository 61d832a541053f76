use crate::matrix_tracking::domain::{DependencyUpdate, DependencyUpdateDetails, DependencyUpdates};

/// UpstreamPathPrepender re-roots updates published by an upstream release.
///
/// When a repository consumes a release of `via`, every update listed in
/// that release's `dependency-updates.yaml` reached the repository through
/// `via`, so `via` becomes the first hop of each path.
pub struct UpstreamPathPrepender;

impl UpstreamPathPrepender {
    pub fn prepend(upstream: DependencyUpdates, via: &DependencyUpdateDetails) -> Vec<DependencyUpdate> {
        upstream
            .updates
            .into_iter()
            .map(|mut update| {
                if update.paths.is_empty() {
                    update.paths = vec![vec![via.clone()]];
                } else {
                    for path in &mut update.paths {
                        path.insert(0, via.clone());
                    }
                }
                update
            })
            .collect()
    }
}
