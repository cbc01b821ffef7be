use super::{Component, SnapshotMetadata, VulnerabilityRecord};

/// SbomSnapshot aggregate: the immutable inventory a dashboard session works on
#[derive(Debug, Clone)]
pub struct SbomSnapshot {
    metadata: SnapshotMetadata,
    components: Vec<Component>,
    vulnerabilities: Vec<VulnerabilityRecord>,
}

impl SbomSnapshot {
    pub fn new(
        metadata: SnapshotMetadata,
        components: Vec<Component>,
        vulnerabilities: Vec<VulnerabilityRecord>,
    ) -> Self {
        Self {
            metadata,
            components,
            vulnerabilities,
        }
    }

    pub fn metadata(&self) -> &SnapshotMetadata {
        &self.metadata
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn vulnerabilities(&self) -> &[VulnerabilityRecord] {
        &self.vulnerabilities
    }
}
