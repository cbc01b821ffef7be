//! Builder for constructing DashboardReadModel from a dashboard session
//!
//! This module provides the builder that transforms domain objects into
//! the render-ready read model.

use super::component_view::{ComponentCardView, LicenseGroupView, VulnerabilityView};
use super::dashboard_read_model::{
    ChartSlice, ComponentListView, DashboardReadModel, FilterView, MetadataView, OverviewView,
    SecurityView, StatisticsView,
};
use crate::application::dto::DashboardTab;
use crate::inventory::domain::{
    Component, ReportMetadata, SeverityBucket, SnapshotMetadata, Statistics, VulnerabilityRecord,
};
use crate::inventory::services::DashboardSession;

/// Builder for constructing DashboardReadModel from a session
pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    /// Builds a DashboardReadModel for the session's current criteria
    ///
    /// # Arguments
    /// * `session` - Dashboard session holding the snapshot and filter criteria
    /// * `report` - Metadata identifying this rendering
    /// * `tabs` - Tabs to populate; the others stay `None`
    pub fn build(
        session: &DashboardSession,
        report: &ReportMetadata,
        tabs: &[DashboardTab],
    ) -> DashboardReadModel {
        let wants = |tab: DashboardTab| tabs.contains(&tab);

        DashboardReadModel {
            metadata: Self::build_metadata(session.snapshot().metadata(), report),
            filter: Self::build_filter(session),
            overview: wants(DashboardTab::Overview).then(|| Self::build_overview(session)),
            components: wants(DashboardTab::Components).then(|| Self::build_components(session)),
            security: wants(DashboardTab::Security).then(|| Self::build_security(session)),
            licenses: wants(DashboardTab::Licenses).then(|| Self::build_licenses(session)),
        }
    }

    fn build_metadata(snapshot: &SnapshotMetadata, report: &ReportMetadata) -> MetadataView {
        MetadataView {
            bom_format: snapshot.bom_format().to_string(),
            spec_version: snapshot.spec_version().to_string(),
            serial_number: snapshot.serial_number().to_string(),
            snapshot_timestamp: snapshot.timestamp().to_string(),
            snapshot_date: snapshot
                .snapshot_date()
                .map(|d| d.format("%Y-%m-%d").to_string()),
            source_tool_name: snapshot.tool().map(|t| t.name.clone()),
            source_tool_version: snapshot.tool().map(|t| t.version.clone()),
            generated_at: report.generated_at().to_string(),
            report_id: report.report_id().to_string(),
            generator_name: report.tool_name().to_string(),
            generator_version: report.tool_version().to_string(),
        }
    }

    fn build_filter(session: &DashboardSession) -> FilterView {
        let criteria = session.criteria();
        FilterView {
            search_text: criteria.search_text.clone(),
            ecosystem: criteria.ecosystem.to_string(),
            license: criteria.license.to_string(),
            vulnerable_only: criteria.vulnerable_only,
            ecosystem_options: session.ecosystem_options(),
            license_options: session.license_options(),
        }
    }

    fn build_overview(session: &DashboardSession) -> OverviewView {
        let stats = session.statistics();

        let ecosystem_chart = stats
            .ecosystem_counts
            .iter()
            .map(|c| ChartSlice {
                label: c.name.clone(),
                value: c.count,
                color: Self::ecosystem_color(&c.name),
            })
            .collect();

        let license_chart = session
            .license_distribution()
            .into_iter()
            .map(|c| ChartSlice {
                label: c.name,
                value: c.count,
                color: None,
            })
            .collect();

        let risk_chart = session
            .risk_distribution()
            .into_iter()
            .map(|(bucket, count)| ChartSlice {
                label: bucket.label().to_string(),
                value: count,
                color: Some(Self::bucket_color(bucket)),
            })
            .collect();

        OverviewView {
            statistics: Self::build_statistics(stats),
            ecosystem_chart,
            license_chart,
            risk_chart,
        }
    }

    fn build_statistics(stats: &Statistics) -> StatisticsView {
        StatisticsView {
            total_components: stats.total_components,
            unique_licenses: stats.unique_licenses,
            vulnerable_components: stats.vulnerable_components,
            total_vulnerabilities: stats.total_vulnerabilities,
            critical_count: stats.critical_count,
            high_count: stats.high_count,
            risk_score: stats.risk_score,
        }
    }

    fn build_components(session: &DashboardSession) -> ComponentListView {
        let cards = session
            .filtered_components()
            .into_iter()
            .map(|c| Self::build_card(session, c))
            .collect();
        ComponentListView { cards }
    }

    fn build_card(session: &DashboardSession, component: &Component) -> ComponentCardView {
        let matching = session.vulnerabilities_for(component);
        ComponentCardView {
            key: component.key(),
            name: component.name().to_string(),
            group: component.group().map(str::to_string),
            coordinate: component.coordinate(),
            version: component.version().to_string(),
            component_type: component.component_type().to_string(),
            license: component.license().to_string(),
            ecosystem: component.ecosystem().to_string(),
            severity_bucket: session.severity_bucket(component),
            vulnerabilities: matching.into_iter().map(Self::build_vulnerability).collect(),
        }
    }

    fn build_vulnerability(record: &VulnerabilityRecord) -> VulnerabilityView {
        VulnerabilityView {
            id: record.id().to_string(),
            package_name: record.package_name().to_string(),
            installed_version: record.installed_version().to_string(),
            fixed_version: record.fixed_version().to_string(),
            fixed_versions: record
                .fixed_versions()
                .into_iter()
                .map(str::to_string)
                .collect(),
            severity: record.severity(),
        }
    }

    fn build_security(session: &DashboardSession) -> SecurityView {
        SecurityView {
            vulnerabilities: session
                .snapshot()
                .vulnerabilities()
                .iter()
                .map(Self::build_vulnerability)
                .collect(),
            affected_components: session.statistics().vulnerable_components,
        }
    }

    fn build_licenses(session: &DashboardSession) -> Vec<LicenseGroupView> {
        session
            .components_by_license()
            .into_iter()
            .map(|(license, members)| LicenseGroupView {
                license: license.to_string(),
                components: members
                    .iter()
                    .map(|c| format!("{}@{}", c.name(), c.version()))
                    .collect(),
            })
            .collect()
    }

    fn ecosystem_color(ecosystem: &str) -> Option<&'static str> {
        match ecosystem {
            "maven" => Some("#f97316"),
            "npm" => Some("#8b5cf6"),
            _ => None,
        }
    }

    fn bucket_color(bucket: SeverityBucket) -> &'static str {
        match bucket {
            SeverityBucket::Critical => "#dc2626",
            SeverityBucket::High => "#f97316",
            SeverityBucket::Low => "#eab308",
            SeverityBucket::None => "#22c55e",
        }
    }
}
