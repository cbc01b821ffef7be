use crate::inventory::domain::{Component, VulnerabilityRecord};

/// VulnerabilityMatcher correlates components with vulnerability records
///
/// A record applies to a component when either
/// - the part of `package_name` after the last `:` equals the component name, or
/// - `group:name` equals `package_name`.
///
/// Comparison is exact (no case or whitespace normalization). The relation is
/// many-to-many: callers must not assume one record per component or the reverse.
pub struct VulnerabilityMatcher;

impl VulnerabilityMatcher {
    pub fn matches(component: &Component, record: &VulnerabilityRecord) -> bool {
        if component.name() == record.package_leaf_name() {
            return true;
        }

        match component.group() {
            Some(group) => Self::is_group_qualified(group, component.name(), record.package_name()),
            None => false,
        }
    }

    /// Every record matching the component, in input order
    pub fn vulnerabilities_for<'a>(
        component: &Component,
        records: &'a [VulnerabilityRecord],
    ) -> Vec<&'a VulnerabilityRecord> {
        records
            .iter()
            .filter(|record| Self::matches(component, record))
            .collect()
    }

    pub fn has_vulnerabilities(component: &Component, records: &[VulnerabilityRecord]) -> bool {
        records.iter().any(|record| Self::matches(component, record))
    }

    /// `group + ":" + name == package_name`, compared without allocating
    fn is_group_qualified(group: &str, name: &str, package_name: &str) -> bool {
        package_name
            .strip_prefix(group)
            .and_then(|rest| rest.strip_prefix(':'))
            .is_some_and(|rest| rest == name)
    }
}
