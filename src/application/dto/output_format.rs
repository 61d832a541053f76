use crate::shared::Result;
use serde::Serialize;

/// Output format for query results printed by the CLI
///
/// `matrix.yaml` and `dependency-updates.yaml` are always YAML; this only
/// affects what is printed for humans or scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML, the format of the persisted files (default)
    #[default]
    Yaml,
    /// JSON, for consumption with tools like jq
    Json,
}

impl OutputFormat {
    /// Serializes `value` in this format, always ending with a newline.
    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        let mut rendered = match self {
            OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
        };
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'yaml' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
