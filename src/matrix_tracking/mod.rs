/// Dependency matrix tracking - domain model and pure services
///
/// Nothing under this module performs I/O; the application layer feeds it
/// through the outbound ports.
pub mod domain;
pub mod services;
