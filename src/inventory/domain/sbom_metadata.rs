use chrono::{DateTime, NaiveDate};

/// Tool that produced the SBOM snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub group: Option<String>,
    pub version: String,
}

/// SnapshotMetadata value object describing the embedded SBOM document
#[derive(Debug, Clone)]
pub struct SnapshotMetadata {
    bom_format: String,
    spec_version: String,
    serial_number: String,
    timestamp: String,
    tool: Option<ToolInfo>,
}

impl SnapshotMetadata {
    pub fn new(
        bom_format: String,
        spec_version: String,
        serial_number: String,
        timestamp: String,
        tool: Option<ToolInfo>,
    ) -> Self {
        Self {
            bom_format,
            spec_version,
            serial_number,
            timestamp,
            tool,
        }
    }

    pub fn bom_format(&self) -> &str {
        &self.bom_format
    }

    pub fn spec_version(&self) -> &str {
        &self.spec_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool(&self) -> Option<&ToolInfo> {
        self.tool.as_ref()
    }

    /// Calendar date of the snapshot, in the timestamp's own offset
    pub fn snapshot_date(&self) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.date_naive())
    }
}

/// ReportMetadata value object identifying one rendering of the dashboard
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: String,
    report_id: String,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(
        generated_at: String,
        report_id: String,
        tool_name: String,
        tool_version: String,
    ) -> Self {
        Self {
            generated_at,
            report_id,
            tool_name,
            tool_version,
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
