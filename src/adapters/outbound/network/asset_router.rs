use super::HttpAssetClient;
use crate::adapters::outbound::filesystem::FileSystemReader;
use crate::matrix_tracking::domain::DependencyUpdates;
use crate::ports::outbound::UpdatesAssetReader;
use crate::shared::Result;

/// AssetReaderRouter sends `http(s)://` locations to the network and
/// everything else to the local file system.
pub struct AssetReaderRouter {
    local: FileSystemReader,
    remote: HttpAssetClient,
}

impl AssetReaderRouter {
    pub fn new() -> Result<Self> {
        Ok(Self {
            local: FileSystemReader::new(),
            remote: HttpAssetClient::new()?,
        })
    }

    pub fn is_remote(location: &str) -> bool {
        location.starts_with("http://") || location.starts_with("https://")
    }
}

impl UpdatesAssetReader for AssetReaderRouter {
    fn read_updates(&self, location: &str) -> Result<DependencyUpdates> {
        if Self::is_remote(location) {
            self.remote.read_updates(location)
        } else {
            self.local.read_updates(location)
        }
    }
}
