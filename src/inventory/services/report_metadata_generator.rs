use crate::inventory::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// ReportMetadataGenerator service for identifying one dashboard rendering
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates report metadata with current timestamp and unique report id
    pub fn generate(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let generated_at = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            generated_at,
            report_id,
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Generates report metadata attributed to this crate
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn generate_default() -> ReportMetadata {
        Self::generate(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
