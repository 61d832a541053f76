use crate::matrix_tracking::domain::{Dependency, DependencyMatrix};
use crate::ports::outbound::MatrixFormatter;
use crate::shared::error::MatrixError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Markdown table header for the dependency matrix
const TABLE_HEADER: &str = "| Dependency | Component | Version | Sources | Mismatched Versions |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|------------|-----------|---------|---------|---------------------|\n";

/// MarkdownFormatter adapter rendering the matrix as a single table
///
/// Cell contents are emitted verbatim; owners, repos and versions are not
/// expected to carry markdown syntax.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, output: &mut String) {
        output.push_str("# Dependency Matrix\n\n");
    }

    fn render_row(&self, output: &mut String, dependency: &Dependency) {
        let sources: Vec<String> = dependency
            .sources
            .iter()
            .map(|s| s.path.markdown())
            .collect();

        output.push_str(&format!(
            "| [{}/{}]({}) | {} | [{}]({}) | {} | {} |\n",
            dependency.owner,
            dependency.repo,
            dependency.url,
            dependency.component,
            dependency.version,
            dependency.version_url,
            sources.join("<br>"),
            Self::mismatched_versions(dependency).join("<br>")
        ));
    }

    /// Source versions that disagree with the recorded one, as `**version**: paths`.
    fn mismatched_versions(dependency: &Dependency) -> Vec<String> {
        let mut by_version: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for source in dependency
            .sources
            .iter()
            .filter(|s| s.version != dependency.version)
        {
            by_version
                .entry(source.version.as_str())
                .or_default()
                .push(source.path.markdown());
        }

        by_version
            .into_iter()
            .map(|(version, paths)| format!("**{}**: {}", version, paths.join(";")))
            .collect()
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixFormatter for MarkdownFormatter {
    fn format(&self, matrix: &DependencyMatrix) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output);
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for dependency in &matrix.dependencies {
            self.render_row(&mut output, dependency);
        }
        Ok(output)
    }
}

/// Renders `matrix` with [`MarkdownFormatter`] and writes it to `path`.
pub fn generate_markdown_dependency_matrix(path: &Path, matrix: &DependencyMatrix) -> Result<()> {
    let content = MarkdownFormatter::new().format(matrix)?;
    fs::write(path, content).map_err(|e| MatrixError::FileWriteError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    Ok(())
}
