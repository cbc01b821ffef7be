use super::{ComponentFilter, StatisticsCalculator, VulnerabilityIndex};
use crate::inventory::domain::{
    CategoryCount, Component, FilterCriteria, SbomSnapshot, Selector, SeverityBucket, Statistics,
    VulnerabilityRecord,
};
use crate::inventory::policies::SeverityBucketPolicy;
use crate::shared::error::DashboardError;
use crate::shared::Result;

/// DashboardSession - One interactive view over an immutable snapshot
///
/// The snapshot never changes after construction, so the record index and the
/// global statistics are computed once here. The filter criteria are the only
/// mutable state; each call to [`apply_criteria`](Self::apply_criteria) replaces
/// them wholesale and the filtered view is recomputed on demand.
#[derive(Debug)]
pub struct DashboardSession {
    snapshot: SbomSnapshot,
    index: VulnerabilityIndex,
    statistics: Statistics,
    criteria: FilterCriteria,
}

impl DashboardSession {
    pub fn new(snapshot: SbomSnapshot) -> Self {
        let index = VulnerabilityIndex::build(snapshot.vulnerabilities());
        let statistics = StatisticsCalculator::compute_with(
            snapshot.components(),
            snapshot.vulnerabilities(),
            |c| index.contains(c),
        );

        Self {
            snapshot,
            index,
            statistics,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn snapshot(&self) -> &SbomSnapshot {
        &self.snapshot
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Validates and installs new filter criteria
    ///
    /// # Errors
    /// Returns an error if a selector names an ecosystem or license that does
    /// not occur in the snapshot. The current criteria are kept in that case.
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) -> Result<()> {
        Self::validate_selector("ecosystem", &criteria.ecosystem, &self.ecosystem_options())?;
        Self::validate_selector("license", &criteria.license, &self.license_options())?;
        self.criteria = criteria;
        Ok(())
    }

    /// Components passing the current criteria, in snapshot order
    pub fn filtered_components(&self) -> Vec<&Component> {
        ComponentFilter::new(&self.criteria)
            .filter_with(self.snapshot.components(), |c| self.index.contains(c))
    }

    pub fn vulnerabilities_for(&self, component: &Component) -> Vec<&VulnerabilityRecord> {
        self.index
            .records_for(component, self.snapshot.vulnerabilities())
    }

    pub fn has_vulnerabilities(&self, component: &Component) -> bool {
        self.index.contains(component)
    }

    pub fn severity_bucket(&self, component: &Component) -> SeverityBucket {
        SeverityBucketPolicy::bucket(self.vulnerabilities_for(component))
    }

    /// Whole-inventory risk distribution (ignores the current criteria)
    pub fn risk_distribution(&self) -> Vec<(SeverityBucket, usize)> {
        StatisticsCalculator::risk_distribution(self.snapshot.components(), |c| {
            self.severity_bucket(c)
        })
    }

    pub fn license_distribution(&self) -> Vec<CategoryCount> {
        StatisticsCalculator::group_by_license(self.snapshot.components())
    }

    pub fn ecosystem_options(&self) -> Vec<String> {
        StatisticsCalculator::selector_options(
            self.snapshot.components().iter().map(Component::ecosystem),
        )
    }

    pub fn license_options(&self) -> Vec<String> {
        StatisticsCalculator::selector_options(
            self.snapshot.components().iter().map(Component::license),
        )
    }

    /// Components grouped by license, licenses in first-seen order
    pub fn components_by_license(&self) -> Vec<(&str, Vec<&Component>)> {
        let mut groups: Vec<(&str, Vec<&Component>)> = Vec::new();
        for component in self.snapshot.components() {
            match groups.iter_mut().find(|(license, _)| *license == component.license()) {
                Some((_, members)) => members.push(component),
                None => groups.push((component.license(), vec![component])),
            }
        }
        groups
    }

    fn validate_selector(field: &str, selector: &Selector, options: &[String]) -> Result<()> {
        if let Selector::Only(value) = selector {
            if !options.iter().any(|o| o == value) {
                return Err(DashboardError::InvalidFilter {
                    field: field.to_string(),
                    value: value.clone(),
                    options: options.join(", "),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::{Severity, SnapshotMetadata};

    fn component(name: &str, group: Option<&str>, license: &str, ecosystem: &str) -> Component {
        Component::new(
            name.to_string(),
            group.map(str::to_string),
            "1.0.0".to_string(),
            license.to_string(),
            ecosystem.to_string(),
        )
        .unwrap()
    }

    fn record(id: &str, package_name: &str, severity: Severity) -> VulnerabilityRecord {
        VulnerabilityRecord::new(
            id.to_string(),
            package_name.to_string(),
            "1.0.0".to_string(),
            "1.0.1".to_string(),
            severity,
        )
        .unwrap()
    }

    fn session() -> DashboardSession {
        let metadata = SnapshotMetadata::new(
            "CycloneDX".to_string(),
            "1.6".to_string(),
            "urn:uuid:test".to_string(),
            "2026-01-20T20:46:59+00:00".to_string(),
            None,
        );
        let components = vec![
            component(
                "jackson-databind",
                Some("com.fasterxml.jackson.core"),
                "Apache-2.0",
                "maven",
            ),
            component("logback-classic", Some("ch.qos.logback"), "EPL-1.0", "maven"),
            component("ws", None, "MIT", "npm"),
            component("express", None, "MIT", "npm"),
        ];
        let records = vec![
            record(
                "CVE-2020-9546",
                "com.fasterxml.jackson.core:jackson-databind",
                Severity::Critical,
            ),
            record("CVE-2024-37890", "ws", Severity::High),
            record("GHSA-0001", "ws", Severity::Medium),
        ];
        DashboardSession::new(SbomSnapshot::new(metadata, components, records))
    }

    #[test]
    fn test_statistics_computed_at_construction() {
        let session = session();
        let stats = session.statistics();
        assert_eq!(stats.total_components, 4);
        assert_eq!(stats.vulnerable_components, 2);
        assert_eq!(stats.critical_count, 1);
        assert_eq!(stats.high_count, 1);
        // (10 + 5) / 4 = 3.75
        assert_eq!(stats.risk_score, 3.8);
    }

    #[test]
    fn test_default_view_contains_everything() {
        let session = session();
        let names: Vec<&str> = session.filtered_components().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["jackson-databind", "logback-classic", "ws", "express"]);
    }

    #[test]
    fn test_apply_criteria_changes_view() {
        let mut session = session();
        session
            .apply_criteria(FilterCriteria {
                vulnerable_only: true,
                ..FilterCriteria::default()
            })
            .unwrap();
        let names: Vec<&str> = session.filtered_components().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["jackson-databind", "ws"]);

        session.apply_criteria(FilterCriteria::default()).unwrap();
        assert_eq!(session.filtered_components().len(), 4);
    }

    #[test]
    fn test_apply_criteria_rejects_unknown_selector() {
        let mut session = session();
        let result = session.apply_criteria(FilterCriteria {
            ecosystem: Selector::Only("pypi".to_string()),
            ..FilterCriteria::default()
        });
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Unknown ecosystem filter: pypi"));
        assert!(message.contains("ALL, maven, npm"));
        assert!(session.criteria().is_unrestricted());
    }

    #[test]
    fn test_severity_bucket_and_distribution() {
        let session = session();
        let components = session.snapshot().components();
        assert_eq!(session.severity_bucket(&components[0]), SeverityBucket::Critical);
        assert_eq!(session.severity_bucket(&components[2]), SeverityBucket::High);
        assert_eq!(session.severity_bucket(&components[3]), SeverityBucket::None);
        assert_eq!(
            session.risk_distribution(),
            vec![
                (SeverityBucket::Critical, 1),
                (SeverityBucket::High, 1),
                (SeverityBucket::Low, 0),
                (SeverityBucket::None, 2),
            ]
        );
    }

    #[test]
    fn test_vulnerabilities_for_uses_record_order() {
        let session = session();
        let ws = &session.snapshot().components()[2];
        let ids: Vec<&str> = session.vulnerabilities_for(ws).iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["CVE-2024-37890", "GHSA-0001"]);
        assert!(session.has_vulnerabilities(ws));
    }

    #[test]
    fn test_options_and_license_groups() {
        let session = session();
        assert_eq!(session.ecosystem_options(), vec!["ALL", "maven", "npm"]);
        assert_eq!(session.license_options(), vec!["ALL", "Apache-2.0", "EPL-1.0", "MIT"]);

        let groups = session.components_by_license();
        let summary: Vec<(&str, usize)> = groups.iter().map(|(l, m)| (*l, m.len())).collect();
        assert_eq!(summary, vec![("Apache-2.0", 1), ("EPL-1.0", 1), ("MIT", 2)]);

        let distribution = session.license_distribution();
        assert_eq!(distribution[0], CategoryCount::new("MIT", 2));
    }
}
