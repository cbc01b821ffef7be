//! Component view structs for read model
//!
//! These structs provide a flattened, render-ready view of component data.

use crate::inventory::domain::{Severity, SeverityBucket};

/// View representation of one component card
#[derive(Debug, Clone)]
pub struct ComponentCardView {
    /// Identity key (`group-name-version`)
    pub key: String,
    pub name: String,
    pub group: Option<String>,
    /// `group:name`, or the bare name when there is no group
    pub coordinate: String,
    pub version: String,
    pub component_type: String,
    pub license: String,
    pub ecosystem: String,
    /// Highest-severity bucket of the matching vulnerabilities
    pub severity_bucket: SeverityBucket,
    /// Matching vulnerability records, in record order
    pub vulnerabilities: Vec<VulnerabilityView>,
}

impl ComponentCardView {
    /// Badge text, e.g. "1 Vuln" or "3 Vulns"; None when the component is clean
    pub fn vulnerability_badge(&self) -> Option<String> {
        match self.vulnerabilities.len() {
            0 => None,
            1 => Some("1 Vuln".to_string()),
            n => Some(format!("{} Vulns", n)),
        }
    }
}

/// View representation of a vulnerability record
#[derive(Debug, Clone)]
pub struct VulnerabilityView {
    pub id: String,
    pub package_name: String,
    pub installed_version: String,
    /// Raw fixed version string as published
    pub fixed_version: String,
    /// Fixed versions split into individual entries
    pub fixed_versions: Vec<String>,
    pub severity: Severity,
}

/// View representation of one license and the components carrying it
#[derive(Debug, Clone)]
pub struct LicenseGroupView {
    pub license: String,
    /// `name@version` of every component under this license
    pub components: Vec<String>,
}

impl LicenseGroupView {
    pub fn count(&self) -> usize {
        self.components.len()
    }
}
