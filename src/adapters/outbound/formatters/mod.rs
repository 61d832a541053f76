/// Formatter adapters for rendering the dependency matrix
mod markdown_formatter;

pub use markdown_formatter::{generate_markdown_dependency_matrix, MarkdownFormatter};
