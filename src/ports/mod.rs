/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to infrastructure through these
/// outbound (driven) ports.
pub mod outbound;
