pub mod component;
pub mod filter_criteria;
pub mod sbom_metadata;
pub mod snapshot;
pub mod statistics;
pub mod vulnerability;

pub use component::Component;
pub use filter_criteria::{FilterCriteria, Selector, ALL_SELECTOR};
pub use sbom_metadata::{ReportMetadata, SnapshotMetadata, ToolInfo};
pub use snapshot::SbomSnapshot;
pub use statistics::{CategoryCount, Statistics};
pub use vulnerability::{Severity, SeverityBucket, VulnerabilityRecord};
