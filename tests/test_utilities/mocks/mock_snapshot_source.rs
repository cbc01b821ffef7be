use sbom_dashboard::inventory::domain::SnapshotMetadata;
use sbom_dashboard::prelude::*;

/// Mock SnapshotSource for testing, built up entry by entry
#[derive(Default)]
pub struct MockSnapshotSource {
    components: Vec<Component>,
    records: Vec<VulnerabilityRecord>,
    skipped: Vec<String>,
}

impl MockSnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(
        mut self,
        name: &str,
        group: Option<&str>,
        version: &str,
        license: &str,
        ecosystem: &str,
    ) -> Self {
        self.components.push(
            Component::new(
                name.to_string(),
                group.map(str::to_string),
                version.to_string(),
                license.to_string(),
                ecosystem.to_string(),
            )
            .unwrap(),
        );
        self
    }

    pub fn with_record(mut self, id: &str, package_name: &str, severity: Severity) -> Self {
        self.records.push(
            VulnerabilityRecord::new(
                id.to_string(),
                package_name.to_string(),
                "1.0.0".to_string(),
                "1.0.1".to_string(),
                severity,
            )
            .unwrap(),
        );
        self
    }

    pub fn with_skipped(mut self, note: &str) -> Self {
        self.skipped.push(note.to_string());
        self
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn load_snapshot(&self) -> Result<SnapshotLoadResult> {
        let metadata = SnapshotMetadata::new(
            "CycloneDX".to_string(),
            "1.6".to_string(),
            "urn:uuid:00000000-0000-0000-0000-000000000000".to_string(),
            "2026-01-20T20:46:59+00:00".to_string(),
            None,
        );

        Ok(SnapshotLoadResult {
            snapshot: SbomSnapshot::new(metadata, self.components.clone(), self.records.clone()),
            skipped: self.skipped.clone(),
        })
    }
}
