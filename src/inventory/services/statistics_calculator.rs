use super::VulnerabilityMatcher;
use crate::inventory::domain::{
    CategoryCount, Component, Severity, SeverityBucket, Statistics, VulnerabilityRecord,
};
use crate::inventory::policies::{RiskScorePolicy, SeverityBucketPolicy};
use std::collections::HashSet;

/// StatisticsCalculator service for the dashboard's aggregate views
///
/// All functions are pure; an empty inventory yields zero counts and a 0.0
/// risk score.
pub struct StatisticsCalculator;

impl StatisticsCalculator {
    pub fn compute(components: &[Component], records: &[VulnerabilityRecord]) -> Statistics {
        Self::compute_with(components, records, |c| {
            VulnerabilityMatcher::has_vulnerabilities(c, records)
        })
    }

    /// Same as [`compute`](Self::compute) with a caller-supplied vulnerability predicate
    pub fn compute_with<F>(
        components: &[Component],
        records: &[VulnerabilityRecord],
        is_vulnerable: F,
    ) -> Statistics
    where
        F: Fn(&Component) -> bool,
    {
        let total_components = components.len();
        let unique_licenses = components
            .iter()
            .map(Component::license)
            .collect::<HashSet<_>>()
            .len();
        let vulnerable_components = components.iter().filter(|c| is_vulnerable(*c)).count();
        let critical_count = Self::count_severity(records, Severity::Critical);
        let high_count = Self::count_severity(records, Severity::High);

        Statistics {
            total_components,
            ecosystem_counts: Self::count_by_ecosystem(components),
            unique_licenses,
            vulnerable_components,
            total_vulnerabilities: records.len(),
            critical_count,
            high_count,
            risk_score: RiskScorePolicy::score(critical_count, high_count, total_components),
        }
    }

    /// Components per ecosystem, in first-seen order
    pub fn count_by_ecosystem(components: &[Component]) -> Vec<CategoryCount> {
        Self::count_in_first_seen_order(components.iter().map(Component::ecosystem))
    }

    /// Components per license, sorted by descending count
    ///
    /// The sort is stable, so equal counts keep first-encountered order.
    pub fn group_by_license(components: &[Component]) -> Vec<CategoryCount> {
        let mut counts = Self::count_in_first_seen_order(components.iter().map(Component::license));
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Component count per severity bucket, always in Critical, High, Low, None order
    pub fn risk_distribution<F>(
        components: &[Component],
        bucket_of: F,
    ) -> Vec<(SeverityBucket, usize)>
    where
        F: Fn(&Component) -> SeverityBucket,
    {
        let mut counts = [0usize; 4];
        for component in components {
            let bucket = bucket_of(component);
            if let Some(slot) = SeverityBucket::ALL.iter().position(|b| *b == bucket) {
                counts[slot] += 1;
            }
        }

        SeverityBucket::ALL.iter().copied().zip(counts).collect()
    }

    /// Highest-severity bucket of one component against a record list
    pub fn severity_bucket(
        component: &Component,
        records: &[VulnerabilityRecord],
    ) -> SeverityBucket {
        SeverityBucketPolicy::bucket(VulnerabilityMatcher::vulnerabilities_for(component, records))
    }

    /// Distinct values prefixed by the `ALL` selector, in first-seen order
    pub fn selector_options<'a, I>(values: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        std::iter::once(crate::inventory::domain::ALL_SELECTOR.to_string())
            .chain(
                values
                    .into_iter()
                    .filter(|v| seen.insert(*v))
                    .map(str::to_string),
            )
            .collect()
    }

    fn count_severity(records: &[VulnerabilityRecord], severity: Severity) -> usize {
        records.iter().filter(|r| r.severity() == severity).count()
    }

    fn count_in_first_seen_order<'a, I>(values: I) -> Vec<CategoryCount>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: Vec<CategoryCount> = Vec::new();
        for value in values {
            match counts.iter_mut().find(|c| c.name == value) {
                Some(existing) => existing.count += 1,
                None => counts.push(CategoryCount::new(value, 1)),
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str, license: &str, ecosystem: &str) -> Component {
        Component::new(
            name.to_string(),
            None,
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

    #[test]
    fn test_compute_empty_inventory() {
        let stats = StatisticsCalculator::compute(&[], &[]);
        assert_eq!(stats.total_components, 0);
        assert!(stats.ecosystem_counts.is_empty());
        assert_eq!(stats.unique_licenses, 0);
        assert_eq!(stats.vulnerable_components, 0);
        assert_eq!(stats.critical_count, 0);
        assert_eq!(stats.high_count, 0);
        assert_eq!(stats.risk_score, 0.0);
        assert!(stats.risk_score.is_finite());
    }

    #[test]
    fn test_compute_empty_inventory_with_records() {
        let records = vec![record("CVE-1", "ws", Severity::Critical)];
        let stats = StatisticsCalculator::compute(&[], &records);
        assert_eq!(stats.critical_count, 1);
        assert_eq!(stats.risk_score, 0.0);
    }

    #[test]
    fn test_compute_counts() {
        let components = vec![
            component("express", "MIT", "npm"),
            component("ws", "MIT", "npm"),
            component("snakeyaml", "Apache-2.0", "maven"),
            component("pug", "MIT", "npm"),
        ];
        let records = vec![
            record("CVE-1", "ws", Severity::Critical),
            record("CVE-2", "ws", Severity::High),
            record("CVE-3", "org.yaml:snakeyaml", Severity::Medium),
            record("CVE-4", "left-pad", Severity::High),
        ];

        let stats = StatisticsCalculator::compute(&components, &records);
        assert_eq!(stats.total_components, 4);
        assert_eq!(
            stats.ecosystem_counts,
            vec![CategoryCount::new("npm", 3), CategoryCount::new("maven", 1)]
        );
        assert_eq!(stats.unique_licenses, 2);
        assert_eq!(stats.vulnerable_components, 2);
        assert_eq!(stats.total_vulnerabilities, 4);
        assert_eq!(stats.critical_count, 1);
        assert_eq!(stats.high_count, 2);
        // (10 + 10) / 4
        assert_eq!(stats.risk_score, 5.0);
    }

    #[test]
    fn test_group_by_license_sorted_descending() {
        let mut components = Vec::new();
        components.push(component("logback-classic", "EPL-1.0", "maven"));
        for i in 0..9 {
            components.push(component(&format!("npm-{}", i), "MIT", "npm"));
        }
        for i in 0..10 {
            components.push(component(&format!("maven-{}", i), "Apache-2.0", "maven"));
        }

        let grouped = StatisticsCalculator::group_by_license(&components);
        assert_eq!(
            grouped,
            vec![
                CategoryCount::new("Apache-2.0", 10),
                CategoryCount::new("MIT", 9),
                CategoryCount::new("EPL-1.0", 1),
            ]
        );
    }

    #[test]
    fn test_group_by_license_ties_keep_first_seen_order() {
        let components = vec![
            component("a", "MIT", "npm"),
            component("b", "ISC", "npm"),
            component("c", "BSD-3-Clause", "npm"),
            component("d", "ISC", "npm"),
            component("e", "MIT", "npm"),
        ];
        let grouped = StatisticsCalculator::group_by_license(&components);
        let names: Vec<&str> = grouped.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["MIT", "ISC", "BSD-3-Clause"]);
    }

    #[test]
    fn test_risk_distribution_includes_zero_buckets() {
        let components = vec![
            component("ws", "MIT", "npm"),
            component("express", "MIT", "npm"),
            component("pug", "MIT", "npm"),
        ];
        let records = vec![
            record("CVE-1", "ws", Severity::High),
            record("CVE-2", "pug", Severity::Unknown),
        ];

        let distribution = StatisticsCalculator::risk_distribution(&components, |c| {
            StatisticsCalculator::severity_bucket(c, &records)
        });
        assert_eq!(
            distribution,
            vec![
                (SeverityBucket::Critical, 0),
                (SeverityBucket::High, 1),
                (SeverityBucket::Low, 1),
                (SeverityBucket::None, 1),
            ]
        );
    }

    #[test]
    fn test_selector_options() {
        let components = vec![
            component("a", "MIT", "npm"),
            component("b", "Apache-2.0", "maven"),
            component("c", "MIT", "npm"),
        ];
        assert_eq!(
            StatisticsCalculator::selector_options(components.iter().map(Component::ecosystem)),
            vec!["ALL", "npm", "maven"]
        );
        assert_eq!(
            StatisticsCalculator::selector_options(components.iter().map(Component::license)),
            vec!["ALL", "MIT", "Apache-2.0"]
        );
        assert_eq!(
            StatisticsCalculator::selector_options(std::iter::empty()),
            vec!["ALL"]
        );
    }
}
