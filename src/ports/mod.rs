/// Ports module defining interfaces for hexagonal architecture
///
/// The use cases only talk to infrastructure (file system, network,
/// console) through the outbound ports declared here.
pub mod outbound;
