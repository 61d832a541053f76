mod consistency_verifier;
mod matrix_merger;
mod message_parser;
mod upstream_paths;

pub use consistency_verifier::{ConsistencyVerifier, VersionDrift};
pub use matrix_merger::{MatrixMerger, MergeOutcome};
pub use message_parser::DependencyMessageParser;
pub use upstream_paths::UpstreamPathPrepender;
