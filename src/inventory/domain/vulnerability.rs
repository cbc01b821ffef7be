use crate::shared::error::DashboardError;
use crate::shared::Result;
use std::fmt;

/// Severity level of a vulnerability record
///
/// Variants are declared from most to least severe so that sorting puts
/// `Critical` first. Values outside the known set are tolerated and collapse
/// into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    /// Maps an advisory severity label to a Severity.
    ///
    /// Comparison is exact: only the upper-case labels are recognized.
    pub fn from_label(label: &str) -> Self {
        match label {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-way reduction of a component's vulnerabilities used for risk charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityBucket {
    Critical,
    High,
    Low,
    None,
}

impl SeverityBucket {
    /// All buckets in display order
    pub const ALL: [SeverityBucket; 4] = [
        SeverityBucket::Critical,
        SeverityBucket::High,
        SeverityBucket::Low,
        SeverityBucket::None,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SeverityBucket::Critical => "Critical",
            SeverityBucket::High => "High",
            SeverityBucket::Low => "Low",
            SeverityBucket::None => "None",
        }
    }
}

impl fmt::Display for SeverityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// VulnerabilityRecord value object representing one known advisory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilityRecord {
    id: String,
    package_name: String,
    installed_version: String,
    fixed_version: String,
    severity: Severity,
}

impl VulnerabilityRecord {
    pub fn new(
        id: String,
        package_name: String,
        installed_version: String,
        fixed_version: String,
        severity: Severity,
    ) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(DashboardError::Validation {
                message: "Vulnerability ID cannot be empty".to_string(),
            }
            .into());
        }

        if package_name.is_empty() {
            return Err(DashboardError::Validation {
                message: format!("Vulnerability {} has an empty package name", id),
            }
            .into());
        }

        Ok(Self {
            id,
            package_name,
            installed_version,
            fixed_version,
            severity,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Affected package, either a bare name or a `group:name` composite
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// The part of the package name after the last `:`
    pub fn package_leaf_name(&self) -> &str {
        self.package_name
            .rsplit(':')
            .next()
            .unwrap_or(&self.package_name)
    }

    pub fn installed_version(&self) -> &str {
        &self.installed_version
    }

    /// Raw fixed version string, possibly a comma-separated list
    pub fn fixed_version(&self) -> &str {
        &self.fixed_version
    }

    /// Fixed versions split on `,`, trimmed, with empty entries dropped
    pub fn fixed_versions(&self) -> Vec<&str> {
        self.fixed_version
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
