use crate::matrix_tracking::domain::DependencyUpdates;
use crate::ports::outbound::UpdatesAssetReader;
use crate::shared::error::MatrixError;
use crate::shared::security::MAX_FILE_SIZE;
use crate::shared::Result;
use reqwest::blocking::Client;
use std::time::Duration;

/// HttpAssetClient adapter downloading `dependency-updates.yaml` release assets
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Rejects responses larger than the local file size limit
/// - Retries transport errors and 5xx responses a bounded number of times
pub struct HttpAssetClient {
    client: Client,
    max_retries: u32,
}

impl HttpAssetClient {
    const TIMEOUT_SECONDS: u64 = 30;

    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dep-matrix/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self::with_client(client))
    }

    fn with_client(client: Client) -> Self {
        Self {
            client,
            max_retries: 3,
        }
    }

    fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut last_error = anyhow::anyhow!("no attempt made");

        for attempt in 1..=self.max_retries {
            match self.fetch(url) {
                Ok(body) => return Ok(body),
                Err(FetchFailure::Permanent(e)) => return Err(e),
                Err(FetchFailure::Transient(e)) => {
                    last_error = e;
                    if attempt < self.max_retries {
                        std::thread::sleep(Duration::from_millis(100 * attempt as u64));
                    }
                }
            }
        }

        Err(last_error)
    }

    fn fetch(&self, url: &str) -> std::result::Result<String, FetchFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchFailure::Transient(e.into()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(FetchFailure::Transient(anyhow::anyhow!(
                "server returned status code {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(FetchFailure::Permanent(anyhow::anyhow!(
                "server returned status code {}",
                status
            )));
        }

        if let Some(length) = response.content_length() {
            if length > MAX_FILE_SIZE {
                return Err(FetchFailure::Permanent(anyhow::anyhow!(
                    "asset is too large ({} bytes)",
                    length
                )));
            }
        }

        let body = response
            .text()
            .map_err(|e| FetchFailure::Transient(e.into()))?;
        if body.len() as u64 > MAX_FILE_SIZE {
            return Err(FetchFailure::Permanent(anyhow::anyhow!(
                "asset is too large ({} bytes)",
                body.len()
            )));
        }
        Ok(body)
    }
}

/// Transport errors and 5xx responses are worth another attempt; a 4xx
/// (typically a 404 for a release without the asset) is not.
enum FetchFailure {
    Transient(anyhow::Error),
    Permanent(anyhow::Error),
}

impl UpdatesAssetReader for HttpAssetClient {
    fn read_updates(&self, location: &str) -> Result<DependencyUpdates> {
        let body = self
            .fetch_with_retry(location)
            .map_err(|e| MatrixError::AssetFetchError {
                location: location.to_string(),
                details: e.to_string(),
            })?;

        serde_yaml_ng::from_str(&body).map_err(|e| {
            MatrixError::AssetFetchError {
                location: location.to_string(),
                details: format!("unmarshaling asset: {}", e),
            }
            .into()
        })
    }
}
