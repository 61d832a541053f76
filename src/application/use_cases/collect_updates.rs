use crate::matrix_tracking::domain::{DependencyUpdate, DependencyUpdates};
use crate::matrix_tracking::services::DependencyMessageParser;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;
use anyhow::Context;

/// Splits a commit log into messages on lines consisting only of `---`.
/// Blank messages are dropped.
pub fn split_commit_messages(content: &str) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim() == "---" {
            messages.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    messages.push(current.join("\n"));

    messages
        .into_iter()
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

/// CollectUpdatesUseCase - turns the commit messages of a release into the
/// `dependency-updates.yaml` it publishes
pub struct CollectUpdatesUseCase<PR> {
    progress_reporter: PR,
    default_host: String,
}

impl<PR: ProgressReporter> CollectUpdatesUseCase<PR> {
    pub fn new(progress_reporter: PR, default_host: impl Into<String>) -> Self {
        Self {
            progress_reporter,
            default_host: default_host.into(),
        }
    }

    /// Messages that are not dependency updates are skipped; a malformed
    /// dependency update message fails the whole collection.
    pub fn execute(&self, messages: &[String]) -> Result<DependencyUpdates> {
        let mut updates = Vec::new();

        for (index, message) in messages.iter().enumerate() {
            let parsed = DependencyMessageParser::parse(message)
                .with_context(|| format!("commit message {}", index + 1))?;
            if let Some(parsed) = parsed {
                let details = parsed.into_update_details(&self.default_host);
                self.progress_reporter.report(&format!(
                    "   {} {} -> {}",
                    details, details.from_version, details.to_version
                ));
                updates.push(DependencyUpdate::direct(details));
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} dependency update(s) from {} commit message(s)",
            updates.len(),
            messages.len()
        ));

        Ok(DependencyUpdates::new(updates))
    }
}
