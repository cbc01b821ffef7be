use crate::inventory::domain::{
    Component, SbomSnapshot, Severity, SnapshotMetadata, ToolInfo, VulnerabilityRecord,
};
use crate::ports::outbound::{SnapshotLoadResult, SnapshotSource};
use crate::shared::error::DashboardError;
use crate::shared::Result;
use serde::Deserialize;

/// Snapshot compiled into the binary
const EMBEDDED_SNAPSHOT: &str = include_str!("snapshot.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    bom_format: String,
    #[serde(default)]
    spec_version: String,
    #[serde(default)]
    serial_number: String,
    #[serde(default)]
    metadata: RawMetadata,
    #[serde(default)]
    components: Vec<RawComponent>,
    #[serde(default)]
    vulnerabilities: Vec<RawVulnerability>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    tools: RawTools,
}

#[derive(Debug, Default, Deserialize)]
struct RawTools {
    #[serde(default)]
    components: Vec<RawTool>,
}

#[derive(Debug, Deserialize)]
struct RawTool {
    name: Option<String>,
    group: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawComponent {
    name: Option<String>,
    group: Option<String>,
    version: Option<String>,
    #[serde(rename = "type")]
    component_type: Option<String>,
    license: Option<String>,
    ecosystem: Option<String>,
}

/// Vulnerability record as published by the scanner (Trivy field names)
#[derive(Debug, Deserialize)]
struct RawVulnerability {
    #[serde(rename = "VulnerabilityID")]
    id: Option<String>,
    #[serde(rename = "PkgName")]
    package_name: Option<String>,
    #[serde(rename = "InstalledVersion")]
    installed_version: Option<String>,
    #[serde(rename = "FixedVersion")]
    fixed_version: Option<String>,
    #[serde(rename = "Severity")]
    severity: Option<String>,
}

/// EmbeddedSnapshotSource adapter serving the snapshot bundled with the binary
///
/// Entries missing a required field are skipped and described in
/// [`SnapshotLoadResult::skipped`]; only a document that is not valid JSON
/// fails the load.
pub struct EmbeddedSnapshotSource {
    content: String,
}

impl EmbeddedSnapshotSource {
    pub fn new() -> Self {
        Self::from_json(EMBEDDED_SNAPSHOT)
    }

    /// Creates a source over an arbitrary snapshot document
    pub fn from_json(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    fn convert_metadata(raw: &RawSnapshot) -> SnapshotMetadata {
        let tool = raw.metadata.tools.components.first().and_then(|t| {
            Some(ToolInfo {
                name: t.name.clone()?,
                group: t.group.clone(),
                version: t.version.clone()?,
            })
        });

        SnapshotMetadata::new(
            raw.bom_format.clone(),
            raw.spec_version.clone(),
            raw.serial_number.clone(),
            raw.metadata.timestamp.clone(),
            tool,
        )
    }

    fn convert_component(raw: RawComponent) -> std::result::Result<Component, String> {
        let name = raw.name.ok_or("missing name")?;
        let version = raw
            .version
            .ok_or_else(|| format!("{}: missing version", name))?;
        let license = raw
            .license
            .ok_or_else(|| format!("{}@{}: missing license", name, version))?;
        let ecosystem = raw
            .ecosystem
            .ok_or_else(|| format!("{}@{}: missing ecosystem", name, version))?;

        let component = Component::new(name, raw.group, version, license, ecosystem)
            .map_err(|e| e.to_string())?;

        Ok(match raw.component_type.filter(|t| !t.is_empty()) {
            Some(component_type) => component.with_type(component_type),
            None => component,
        })
    }

    fn convert_vulnerability(
        raw: RawVulnerability,
    ) -> std::result::Result<VulnerabilityRecord, String> {
        let id = raw.id.ok_or("missing VulnerabilityID")?;
        let package_name = raw
            .package_name
            .ok_or_else(|| format!("{}: missing PkgName", id))?;
        let severity = raw
            .severity
            .as_deref()
            .map(Severity::from_label)
            .ok_or_else(|| format!("{}: missing Severity", id))?;

        VulnerabilityRecord::new(
            id,
            package_name,
            raw.installed_version.unwrap_or_default(),
            raw.fixed_version.unwrap_or_default(),
            severity,
        )
        .map_err(|e| e.to_string())
    }
}

impl Default for EmbeddedSnapshotSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotSource for EmbeddedSnapshotSource {
    fn load_snapshot(&self) -> Result<SnapshotLoadResult> {
        let raw: RawSnapshot =
            serde_json::from_str(&self.content).map_err(|e| DashboardError::SnapshotLoadError {
                details: e.to_string(),
            })?;

        let metadata = Self::convert_metadata(&raw);
        let mut skipped = Vec::new();

        let mut components = Vec::with_capacity(raw.components.len());
        for (idx, entry) in raw.components.into_iter().enumerate() {
            match Self::convert_component(entry) {
                Ok(component) => components.push(component),
                Err(reason) => skipped.push(format!("component #{}: {}", idx + 1, reason)),
            }
        }

        let mut records = Vec::with_capacity(raw.vulnerabilities.len());
        for (idx, entry) in raw.vulnerabilities.into_iter().enumerate() {
            match Self::convert_vulnerability(entry) {
                Ok(record) => records.push(record),
                Err(reason) => skipped.push(format!("vulnerability #{}: {}", idx + 1, reason)),
            }
        }

        Ok(SnapshotLoadResult {
            snapshot: SbomSnapshot::new(metadata, components, records),
            skipped,
        })
    }
}
