/// Inventory domain layer - Pure correlation and aggregation logic
///
/// Nothing in this layer performs I/O. Value objects live in `domain`,
/// stateless rules in `policies`, and the engine operations in `services`.
pub mod domain;
pub mod policies;
pub mod services;
