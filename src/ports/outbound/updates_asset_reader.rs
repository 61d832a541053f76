use crate::matrix_tracking::domain::DependencyUpdates;
use crate::shared::Result;

/// UpdatesAssetReader port for fetching a published `dependency-updates.yaml`
///
/// A location is either a local path or an `http(s)://` URL of a release asset.
pub trait UpdatesAssetReader {
    /// Reads and decodes the updates published at `location`
    ///
    /// # Errors
    /// Returns an error if the asset cannot be fetched or is not valid YAML
    fn read_updates(&self, location: &str) -> Result<DependencyUpdates>;
}
