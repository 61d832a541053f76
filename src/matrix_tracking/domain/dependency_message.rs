use super::DependencyUpdateDetails;
use serde::Serialize;

/// Scheme assumed when a slug names no scheme of its own.
const DEFAULT_SCHEME: &str = "https";

/// Parsed form of a `chore(deps): bump <slug> from <v1> to <v2>` commit message.
///
/// Lives only for the duration of a commit scan; it is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyMessage {
    pub owner: String,
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub from_version: String,
    pub to_version: String,
}

impl DependencyMessage {
    /// Resolves the message into update details, filling in `default_host`
    /// when the slug was in short `owner/repo` form.
    pub fn into_update_details(self, default_host: &str) -> DependencyUpdateDetails {
        let host = self.host.unwrap_or_else(|| default_host.to_string());
        let scheme = self.scheme.as_deref().unwrap_or(DEFAULT_SCHEME);
        let url = if self.owner.is_empty() {
            format!("{}://{}/{}", scheme, host, self.repo)
        } else {
            format!("{}://{}/{}/{}", scheme, host, self.owner, self.repo)
        };

        DependencyUpdateDetails {
            host,
            owner: self.owner,
            repo: self.repo,
            component: self.component.unwrap_or_default(),
            url,
            from_version: self.from_version,
            to_version: self.to_version,
            ..Default::default()
        }
    }
}
