use crate::matrix_tracking::domain::DependencyMessage;
use crate::shared::error::MatrixError;
use crate::shared::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Conventional-commit prefix every dependency update message starts with.
static UPDATE_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^chore\((?:deps|dependencies)\):\s+(?:bump|update)\s")
        .expect("dependency prefix regex is valid")
});

/// `chore(deps): bump <slug> from <versions> to <version>[ (#<pr>)]`
///
/// The from part is a single version or a list such as `1.0.0, 2.0.0 and v1.0.1`
/// when several versions were replaced at once.
static UPDATE_MESSAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^chore\((?:deps|dependencies)\):\s+(?:bump|update)\s+(\S+)\s+from\s+([^\s,]+(?:(?:,\s*|\s+and\s+)[^\s,]+)*)\s+to\s+(\S+)(?:\s+\(#\d+\))?\s*$",
    )
    .expect("dependency message regex is valid")
});

/// `scheme://host/owner/repo[.git][:component]`, `owner/repo[:component]` or `repo[:component]`
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*)://(?P<host>[^/\s]+)/(?P<owner>[\w.\-]+)/|(?P<short_owner>[\w.\-]+)/)?(?P<repo>[\w.\-]+?)(?:\.git)?(?::(?P<component>[\w.\-]+))?$",
    )
    .expect("dependency slug regex is valid")
});

/// Parses dependency update commit messages.
///
/// Pure: no I/O, the compiled patterns are shared read-only statics.
pub struct DependencyMessageParser;

impl DependencyMessageParser {
    /// Parses the subject line of `msg`.
    ///
    /// Returns `Ok(None)` when the message is not a dependency update (or its
    /// slug has no recognisable shape), and an error when it carries the
    /// update prefix but not the `from ... to ...` structure.
    pub fn parse(msg: &str) -> Result<Option<DependencyMessage>> {
        let subject = msg.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");

        if !UPDATE_PREFIX_REGEX.is_match(subject) {
            return Ok(None);
        }

        let captures = UPDATE_MESSAGE_REGEX.captures(subject).ok_or_else(|| {
            MatrixError::MalformedMessage {
                message: subject.to_string(),
                details: "expected `<slug> from <version> to <version>`".to_string(),
            }
        })?;
        // All three groups are mandatory in the pattern.
        let (slug, from_version, to_version) = (
            captures.get(1).map_or("", |m| m.as_str()),
            captures.get(2).map_or("", |m| m.as_str()),
            captures.get(3).map_or("", |m| m.as_str()),
        );

        let Some(slug) = SLUG_REGEX.captures(slug) else {
            return Ok(None);
        };
        let named = |name: &str| slug.name(name).map(|m| m.as_str().to_string());

        Ok(Some(DependencyMessage {
            owner: named("owner").or_else(|| named("short_owner")).unwrap_or_default(),
            repo: named("repo").unwrap_or_default(),
            host: named("host"),
            scheme: named("scheme"),
            component: named("component"),
            from_version: from_version.to_string(),
            to_version: to_version.to_string(),
        }))
    }
}
