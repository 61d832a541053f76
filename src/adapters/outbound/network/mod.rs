/// Network adapters for fetching upstream release assets
mod asset_router;
mod http_asset_client;

pub use asset_router::AssetReaderRouter;
pub use http_asset_client::HttpAssetClient;
